//! Error taxonomy for the API.
//!
//! Every failure is caught at the handler boundary and mapped to a JSON
//! `{"error": ...}` body plus an HTTP status. Nothing is retried; a device
//! that gets a 5xx re-sends its reading on its own schedule.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::Utc;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The connection string or client options are unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The document store is unreachable or rejected an operation.
    #[error("database error: {0}")]
    Connection(#[from] mongodb::error::Error),

    /// A required field was absent from the request body.
    #[error("missing required field: {0}")]
    Validation(&'static str),

    /// The request body was not valid JSON.
    #[error("invalid JSON payload")]
    Parse,

    /// The readings collection is empty.
    #[error("no readings available")]
    NoReadings,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Parse => StatusCode::BAD_REQUEST,
            ApiError::NoReadings => StatusCode::NOT_FOUND,
            ApiError::Configuration(_) | ApiError::Connection(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(field) => {
                json!({ "error": format!("Missing required field: {}", field) })
            }
            ApiError::Parse => json!({ "error": "Invalid JSON payload" }),
            ApiError::NoReadings => json!({
                "error": "No readings available",
                "timestamp": Utc::now().to_rfc3339(),
            }),
            ApiError::Configuration(_) | ApiError::Connection(_) => {
                json!({ "error": "Database operation failed" })
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
