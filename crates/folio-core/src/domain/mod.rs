//! Core domain layer for Folio.
//!
//! This module contains pure business logic: typed content records, the
//! validation error taxonomy, and the content validators. All I/O
//! (content loading) is handled via ports defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Violations are data**: Validators return reports, never `Err`

// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod report;
pub mod validate;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    CallToAction, Experience, ImageAsset, ProfileInfo, Project, ProjectLink, QuickLink,
    Technology,
};
pub use error::DomainError;
pub use report::{ErrorKind, Report, SummaryStatus, ValidationError, ValidationSummary};
pub use validate::{
    ContentAudit, ContentValidator, FieldPath, RawContent, SanitizedContent, log_errors,
};
pub use value_objects::{
    CtaAction, CtaVariant, LinkKind, ProjectLinkKind, ProjectStatus, TechCategory,
};
