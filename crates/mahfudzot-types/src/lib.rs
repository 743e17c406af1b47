//! Mahfudzot Types - Pure type definitions
//!
//! Data types shared between the storage layer and the HTTP surface. This
//! crate has no async runtime dependencies.

pub mod quote;
pub mod response;

pub use quote::*;
pub use response::*;
