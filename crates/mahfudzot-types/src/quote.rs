//! Quote types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored mahfudzot (short wisdom quotation)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: i64,
    pub text_arabic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_latin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload. Carries every mutable field of a [`Quote`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub text_arabic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_latin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A required field was missing or blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} is required")]
pub struct ValidationError {
    pub field: &'static str,
}

impl QuoteRequest {
    pub fn new(text_arabic: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text_arabic: text_arabic.into(),
            author: author.into(),
            ..Default::default()
        }
    }

    /// Check presence of the required fields. Whitespace-only counts as empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text_arabic.trim().is_empty() {
            return Err(ValidationError {
                field: "text_arabic",
            });
        }
        if self.author.trim().is_empty() {
            return Err(ValidationError { field: "author" });
        }
        Ok(())
    }
}

impl Quote {
    /// Replace every mutable field with the values from `req`.
    ///
    /// `id`, `created_at` and `updated_at` are left to the caller.
    pub fn apply(&mut self, req: QuoteRequest) {
        self.text_arabic = req.text_arabic;
        self.text_latin = req.text_latin;
        self.translation = req.translation;
        self.author = req.author;
        self.category = req.category;
        self.source = req.source;
    }
}
