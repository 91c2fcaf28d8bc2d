use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::constants::{CODE_VALIDATION_FAILED, ERR_VALIDATION_FAILED};
use crate::models::{ErrorResponse, UpstreamFailureResponse};

#[derive(Debug)]
pub enum ApiError {
    NotFound { code: String, message: String },
    ValidationError(Vec<String>),
    /// Any upstream failure; rendered as `500 {error, details}`.
    Upstream { message: String, details: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::ValidationError(errors) => write!(f, "Validation Error: {:?}", errors),
            ApiError::Upstream { message, details } => {
                write!(f, "Upstream Error: {} ({})", message, details)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound { code, message } => HttpResponse::NotFound().json(ErrorResponse {
                success: false,
                code: code.clone(),
                message: message.clone(),
                errors: None,
            }),
            ApiError::ValidationError(errors) => HttpResponse::BadRequest().json(ErrorResponse {
                success: false,
                code: CODE_VALIDATION_FAILED.to_string(),
                message: ERR_VALIDATION_FAILED.to_string(),
                errors: Some(errors.clone()),
            }),
            ApiError::Upstream { message, details } => HttpResponse::InternalServerError()
                .json(UpstreamFailureResponse {
                    error: message.clone(),
                    details: details.clone(),
                }),
        }
    }
}

/// Failure talking to an upstream catalog.
///
/// Both kinds collapse into the same `500` at the HTTP boundary; only the
/// `details` text differs.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("HTTP error! Status: {status}")]
    Http { status: u16 },
    #[error("{0}")]
    Fetch(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Fetch(err.to_string())
    }
}
