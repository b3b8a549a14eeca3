use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Json, Multipart, State};

use crate::invite::{Invitations, Invitee};

use super::types::*;

pub type Result<T> = std::result::Result<T, ErrorResponse>;

async fn customer_file(multipart: &mut Multipart) -> Result<Bytes> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(CUSTOMER_FILE_FIELD) {
            return Ok(field.bytes().await?);
        }
    }

    Err(ErrorResponse::new(format!(
        "no such file: upload must contain a '{CUSTOMER_FILE_FIELD}' field"
    )))
}

pub async fn invite_customers(
    State(invitations): State<Invitations>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<Option<Vec<Invitee>>>> {
    let mut multipart = multipart?;
    let bytes = customer_file(&mut multipart).await?;
    log::info!("Received customer file ({} bytes)", bytes.len());

    let invitees = invitations.respond(&bytes)?;

    Ok(Json(invitees))
}

pub async fn not_put() -> ErrorResponse {
    ErrorResponse::new("HTTP request is not a PUT request")
}
