//! Error types for the store and the HTTP layer.
//!
//! Every failure reaches the client as a status code and a plain-text message.
//! Nothing is retried. A failed transaction is rolled back by the store and the
//! triggering error is still reported.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

/// Failures raised by [`crate::store::Store`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Database connection lock poisoned")]
    Poisoned,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Dataset name required")]
    MissingName,
    #[error("Missing file")]
    MissingFile,
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to parse CSV: {0}")]
    InvalidCsv(#[from] csv::Error),
    #[error("failed to parse JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Upload exceeds the {0} byte limit")]
    UploadTooLarge(usize),
    #[error("{0}")]
    BadRequest(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Failed to write CSV: {0}")]
    Export(String),
    #[error("Blocking task failed: {0}")]
    Blocking(#[from] actix_web::error::BlockingError),
}

impl From<actix_multipart::MultipartError> for ApiError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingName
            | ApiError::MissingFile
            | ApiError::UnsupportedFormat(_)
            | ApiError::InvalidCsv(_)
            | ApiError::InvalidJson(_)
            | ApiError::UploadTooLarge(_)
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Store(_) | ApiError::Export(_) | ApiError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        }
        HttpResponse::build(status)
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}
