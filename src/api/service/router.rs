use axum::extract::DefaultBodyLimit;
use axum::routing::put;

use super::State;
use super::endpoints::*;
use super::types::MAX_UPLOAD_BYTES;

pub fn router(state: State) -> axum::Router {
    axum::Router::new()
        .route("/v1/customer", put(invite_customers).fallback(not_put))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
