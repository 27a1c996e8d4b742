//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use crate::api::response_writer;

use cg_core::{CoreError, StoreError};

use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Resource already exists (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Route exists but not for this method (405)
    #[error("Method not allowed: {message} {location}")]
    MethodNotAllowed {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status();
        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::Conflict { message, .. } => ApiErrorBody {
                code: "CONFLICT".into(),
                message,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
            ApiError::MethodNotAllowed { message, .. } => ApiErrorBody {
                code: "METHOD_NOT_ALLOWED".into(),
                message,
                field: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
            },
        };

        response_writer::json(status, ApiErrorResponse { error: body })
    }
}

/// Convert store outcomes to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { id, .. } => ApiError::NotFound {
                message: format!("User {} not found", id),
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::Conflict { id, .. } => ApiError::Conflict {
                message: format!("User {} already exists", id),
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::Backend { message, .. } => {
                // Don't expose backend details to clients
                log::error!("Users store failure: {}", message);
                ApiError::Internal {
                    message: "Users store operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert request body decode errors to API errors
impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid JSON body: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
