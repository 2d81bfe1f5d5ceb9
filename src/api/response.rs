//! Response envelope and error mapping for the mock endpoints.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON envelope returned by every endpoint.
///
/// ```json
/// { "success": true, "message": "...", "data": { ... } }
/// { "success": false, "error": "Invalid email address" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying a user-facing message and data.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }

    /// A failed response with an error message and no data.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Reasons an endpoint rejects a request.
///
/// The `Display` text of each variant is the user-facing `error` string of the
/// envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found")]
    NotFound,

    /// The body was not JSON of the expected shape. The detail is logged only.
    #[error("Invalid request body")]
    InvalidBody(String),

    /// A field failed validation.
    #[error("{0}")]
    Validation(String),

    /// Anything unexpected. The detail is logged only.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::MethodNotAllowed => 405,
            Self::NotFound => 404,
            Self::InvalidBody(_) | Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }
}

/// Status code and envelope as sent back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: ApiResponse<serde_json::Value>,
}

impl ApiReply {
    #[must_use]
    pub fn success(body: ApiResponse<serde_json::Value>) -> Self {
        Self { status: 200, body }
    }

    #[must_use]
    pub fn from_error(error: &ApiError) -> Self {
        Self {
            status: error.status(),
            body: ApiResponse::failure(error.to_string()),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == 200
    }
}
