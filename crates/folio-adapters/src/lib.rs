//! Infrastructure adapters for Folio.
//!
//! This crate implements the ports defined in `folio-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod sample_content;
pub mod source;

// Re-export commonly used adapters
pub use source::{FileContentSource, MemoryContentSource};
