//! JSON response envelopes

use crate::Quote;
use serde::{Deserialize, Serialize};

/// Envelope around a single quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Quote>,
}

/// Envelope around a page of quotes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotesResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Quote>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Envelope for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub storage: String,
}

impl QuoteResponse {
    pub fn ok(quote: Quote) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(quote),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl QuotesResponse {
    pub fn page(quotes: Vec<Quote>, total: i64, page: u32, limit: u32) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(quotes),
            total: Some(total),
            page: Some(page),
            limit: Some(limit),
        }
    }
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
        }
    }
}
