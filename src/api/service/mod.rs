pub mod endpoints;
pub mod router;
pub mod types;

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::InviteError;
use crate::invite::Invitations;

#[derive(Clone)]
pub struct State {
    pub invitations: Invitations,
}

impl State {
    pub fn new(invitations: Invitations) -> Self {
        Self { invitations }
    }
}

impl axum::extract::FromRef<State> for Invitations {
    fn from_ref(input: &State) -> Self {
        input.invitations
    }
}

impl IntoResponse for types::ErrorResponse {
    fn into_response(self) -> Response {
        log::warn!("Rejected upload: {}", self.message);
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl types::ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<InviteError> for types::ErrorResponse {
    fn from(value: InviteError) -> Self {
        types::ErrorResponse::new(value.to_string())
    }
}

impl From<MultipartError> for types::ErrorResponse {
    fn from(value: MultipartError) -> Self {
        types::ErrorResponse::new(format!("error reading upload: {}", value.body_text()))
    }
}

impl From<MultipartRejection> for types::ErrorResponse {
    fn from(value: MultipartRejection) -> Self {
        types::ErrorResponse::new(format!("expected a multipart upload: {}", value.body_text()))
    }
}
