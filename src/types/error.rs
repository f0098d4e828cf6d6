//! Universal error handling for the API

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::media_storage::BucketError;

/// Application error type rendered as the client-visible JSON responses
///
/// Two-tier taxonomy: storage-layer failures collapse to a fixed-message
/// 500 body, anything else to a generic "Internal Server Error" detail.
/// The underlying cause is logged but never surfaced to the client.
#[derive(Error, Debug)]
pub enum AppError {
    /// S3 write or ACL call failed
    #[error("storage error: {0}")]
    Storage(#[from] BucketError),

    /// The multipart body could not be parsed or read
    #[error("invalid multipart request: {0}")]
    InvalidMultipart(String),

    /// A required multipart field was absent
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Any other failure while handling the request
    #[error("internal error: {0}")]
    Unexpected(anyhow::Error),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Unexpected(err)
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        Self::InvalidMultipart(err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Storage(err) => {
                tracing::error!("Error uploading image to S3: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Error uploading image to S3" })),
                )
                    .into_response()
            }
            Self::InvalidMultipart(msg) => {
                tracing::warn!("Invalid multipart request: {msg}");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "detail": "Invalid multipart form data" })),
                )
                    .into_response()
            }
            Self::MissingField(field) => {
                tracing::warn!("Missing required field: {field}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "detail": format!("Field required: {field}") })),
                )
                    .into_response()
            }
            Self::Unexpected(err) => {
                tracing::error!("Unexpected error handling request: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}
