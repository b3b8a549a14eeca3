use serde::{Deserialize, Serialize};

/// Multipart field holding the uploaded customer file.
pub const CUSTOMER_FILE_FIELD: &str = "customerFile";

/// Largest accepted upload.
pub const MAX_UPLOAD_BYTES: usize = 10 << 20;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
