//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::ErrorEnvelope;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// One or more field rules failed; every violation is listed.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Username and/or email already registered.
    #[error("User already exists: {}", .0.join(", "))]
    Conflict(Vec<String>),

    /// Request body could not be decoded.
    #[error("Invalid input: {0}")]
    BadRequest(String),

    /// The user document exists but does not parse.
    #[error("User store {} is corrupt: {source}", .path.display())]
    StoreCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage I/O error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::StoreCorrupt { .. }
            | AppError::Io(_)
            | AppError::Serialization(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error is a server-side failure whose detail must stay private
    pub fn is_internal(&self) -> bool {
        self.status().is_server_error()
    }

    /// Build the client-facing body (hides internal details)
    fn body(self) -> ErrorEnvelope {
        match self {
            AppError::Validation(errors) => ErrorEnvelope {
                success: false,
                message: "Validation failed".to_string(),
                errors: Some(errors),
            },
            AppError::Conflict(errors) => ErrorEnvelope {
                success: false,
                message: "User already exists".to_string(),
                errors: Some(errors),
            },
            AppError::BadRequest(msg) => ErrorEnvelope {
                success: false,
                message: msg,
                errors: None,
            },
            internal => {
                tracing::error!(error = ?internal, "Internal error: {}", internal);
                ErrorEnvelope {
                    success: false,
                    message: "Internal server error".to_string(),
                    errors: None,
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.body())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(errors: Vec<String>) -> Self {
        AppError::Validation(errors)
    }

    pub fn conflict(errors: Vec<String>) -> Self {
        AppError::Conflict(errors)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
