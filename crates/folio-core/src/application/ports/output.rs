//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `folio-adapters` crate provides implementations.

use crate::domain::RawContent;
use crate::error::FolioResult;

/// Port for loading untrusted portfolio content.
///
/// Implemented by:
/// - `folio_adapters::source::FileContentSource` (production)
/// - `folio_adapters::source::MemoryContentSource` (testing)
///
/// ## Design Notes
///
/// - Loading is all-or-nothing per call; a missing category is `None` in
///   the returned `RawContent`, not an error
/// - Returned values are raw JSON; validation happens in the domain
pub trait ContentSource: Send + Sync {
    /// Load every available content category.
    fn load(&self) -> FolioResult<RawContent>;

    /// Human-readable description of where content comes from, for logs
    /// and error messages.
    fn describe(&self) -> String;
}
