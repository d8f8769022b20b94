use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use burrow_core::ShortenerError;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Request failures and the HTTP status each one maps to.
///
/// Messages are passed to the caller as-is.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body could not be decoded. `400`.
    #[error("{0}")]
    InvalidBody(String),
    /// No mapping carries the requested code. `404` with an empty body.
    #[error("short code not found")]
    NotFound,
    /// The store failed. `500`.
    #[error("{0}")]
    Storage(String),
    /// The stored URL cannot be sent as a `Location` header. `500`.
    #[error("stored url is not a valid redirect target: {0}")]
    InvalidRedirect(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::InvalidRedirect(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ShortenerError> for AppError {
    fn from(error: ShortenerError) -> Self {
        match error {
            ShortenerError::Storage(source) => AppError::Storage(source.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::NotFound => status.into_response(),
            AppError::InvalidBody(message) => (status, message).into_response(),
            AppError::Storage(message) | AppError::InvalidRedirect(message) => {
                error!(error = %message, "request failed");
                (status, message).into_response()
            }
        }
    }
}
