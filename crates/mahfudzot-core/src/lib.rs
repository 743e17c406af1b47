//! Mahfudzot Core Library
//!
//! Domain layer for the mahfudzot service: the error taxonomy, the storage
//! port implemented by every backend, pagination arithmetic and the embedded
//! seed catalog.

// Re-export pure types from mahfudzot-types
pub use mahfudzot_types::*;

pub mod catalog;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod seed;

pub use catalog::{SeedQuote, SEED_CATALOG};
pub use error::{QuoteError, Result};
pub use pagination::PageRequest;
pub use ports::QuoteStore;
pub use seed::seed_store;
