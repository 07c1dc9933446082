//! Error handling module
//!
//! Defines the relay's error kinds and how they are reported to callers

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Detail sent when the upstream credential was not configured
pub const MISSING_CREDENTIAL_DETAIL: &str = "API Key is missing on Server";

/// Response header carrying the error kind
pub const ERROR_KIND_HEADER: &str = "x-error-kind";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Required configuration absent at call time
    #[error("{0}")]
    Configuration(String),

    /// Any failure of the upstream completion call
    #[error("{0}")]
    Upstream(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub detail: String,
}

impl AppError {
    /// Error for a request served without a credential
    pub fn missing_credential() -> Self {
        AppError::Configuration(MISSING_CREDENTIAL_DETAIL.to_string())
    }

    /// Wrap an upstream failure, keeping its whole cause chain in the detail
    pub fn upstream(error: &anyhow::Error) -> Self {
        AppError::Upstream(format!("{:#}", error))
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error kind string
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "configuration_error",
            AppError::Upstream(_) => "upstream_error",
        }
    }

    /// Caller-visible detail
    pub fn detail(&self) -> &str {
        match self {
            AppError::Configuration(detail) | AppError::Upstream(detail) => detail,
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            detail: self.detail().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::error!(
            kind = self.error_type(),
            "Request failed: {} - Status code: {}",
            self,
            status
        );

        let mut response = (status, Json(self.to_error_response())).into_response();
        response.headers_mut().insert(
            ERROR_KIND_HEADER,
            HeaderValue::from_static(self.error_type()),
        );
        response
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
