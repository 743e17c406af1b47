//! HTTP error envelope and status mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mahfudzot_core::{ErrorResponse, QuoteError};

/// Error returned by every handler, rendered as an [`ErrorResponse`]
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, error)
    }

    /// Map a storage failure. `context` becomes the message for failures
    /// that are not the client's fault.
    pub fn from_store(err: QuoteError, context: &str) -> Self {
        match err {
            QuoteError::Validation(_) => Self::bad_request("Invalid quote", err.to_string()),
            QuoteError::NotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, "Quote not found", err.to_string())
            }
            QuoteError::Empty => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, context, err.to_string())
            }
            QuoteError::Unavailable(_) | QuoteError::Storage(_) => {
                tracing::error!("{}: {}", context, err);
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    context,
                    "internal storage error",
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.error, self.message));
        (self.status, body).into_response()
    }
}
