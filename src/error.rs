/// Error types for the mail relay
use http::StatusCode;
use lambda_http::{Body, Response};
use serde_json::{Value, json};
use thiserror::Error;

use crate::handlers::common::json_response;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error ({status}): {message}")]
    Provider {
        status: u16,
        message: String,
        details: Value,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// HTTP status returned to the caller for this error kind
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Provider failures are relayed with the upstream status code
            Self::Provider { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Translates the error into the JSON response returned to the caller
    ///
    /// The body carries the raw message, not the prefixed `Display` form.
    pub fn into_response(self) -> Response<Body> {
        let status = self.status_code();

        let body = match self {
            Self::Validation(msg) | Self::Config(msg) | Self::Internal(msg) => json!({
                "success": false,
                "error": msg,
            }),
            Self::Provider {
                message, details, ..
            } => json!({
                "success": false,
                "error": message,
                "details": details,
            }),
        };

        json_response(status, &body)
    }
}

// Implement conversions for common error types
impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
