use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const EXTRACTION_FAILED_MESSAGE: &str = "Failed to extract text from PDF";

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Failed to extract text from PDF: {0}")]
    ExtractionFailed(String),
}

/// JSON error body: `{"error": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ExtractionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Public error body. The underlying cause stays in the logs.
    pub fn to_response(&self) -> ErrorResponse {
        let error = match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::PayloadTooLarge(_) => "Upload too large".to_string(),
            Self::ExtractionFailed(_) => EXTRACTION_FAILED_MESSAGE.to_string(),
        };
        ErrorResponse { error }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        let body = self.to_response();
        match self {
            // Client errors answer with a plain-text body
            Self::BadRequest(_) | Self::PayloadTooLarge(_) => (status, body.error).into_response(),
            Self::ExtractionFailed(_) => (status, Json(body)).into_response(),
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
