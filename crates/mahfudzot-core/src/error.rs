//! Error types for the quote storage layer

use mahfudzot_types::ValidationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuoteError>;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Quote with id {0} not found")]
    NotFound(i64),

    #[error("No quotes available")]
    Empty,

    /// The backend could not be reached at startup.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl QuoteError {
    pub fn storage(err: impl std::fmt::Display) -> Self {
        QuoteError::Storage(err.to_string())
    }

    pub fn unavailable(err: impl std::fmt::Display) -> Self {
        QuoteError::Unavailable(err.to_string())
    }
}
