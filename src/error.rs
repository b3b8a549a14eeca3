//! Errors raised while turning an uploaded customer file into invitations.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InviteError {
    /// A record is missing one of the required keys.
    #[error("record is missing required key '{field}'")]
    MissingField { field: &'static str },

    /// A key is present but holds the wrong JSON type.
    #[error("cannot convert {field}: value is not of type {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// A longitude or latitude string is not a decimal number.
    #[error("cannot parse {field} '{value}' as a decimal number")]
    NumericParse { field: &'static str, value: String },

    /// Longitude or latitude (radians) outside the valid range.
    #[error("invalid longitude or latitude (longitude: {longitude}, latitude: {latitude})")]
    InvalidCoordinate { longitude: f64, latitude: f64 },

    /// A line of the upload is not a JSON object.
    #[error("invalid JSON record '{record}': {message}")]
    InvalidRecordSyntax { record: String, message: String },

    /// The same user id appears more than once in one upload.
    #[error("customer id overlap: {user_id}")]
    DuplicateIdentifier { user_id: i64 },

    #[error("distance must be >= 0, got {distance}")]
    NegativeDistance { distance: f64 },
}

pub type Result<T> = std::result::Result<T, InviteError>;
