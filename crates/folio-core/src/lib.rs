//! Folio Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Folio
//! portfolio content toolkit, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           folio-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (AuditService)               │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: ContentSource)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     folio-adapters (Infrastructure)     │
//! │  (FileContentSource, MemorySource, …)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ContentValidator, ProfileInfo, …)     │
//! │          No I/O Dependencies            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use folio_core::domain::{ContentValidator, RawContent};
//! use serde_json::json;
//!
//! let raw = json!([{
//!     "id": "github", "label": "GitHub",
//!     "url": "https://github.com/janedoe", "icon": "FaGithub",
//!     "type": "professional", "external": true
//! }]);
//!
//! let report = ContentValidator::validate_quick_links(&raw);
//! assert!(report.is_valid);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{AuditService, ports::ContentSource};
    pub use crate::domain::{
        CallToAction, ContentAudit, ContentValidator, ErrorKind, Experience, FieldPath,
        ImageAsset, ProfileInfo, Project, ProjectLink, QuickLink, RawContent, Report,
        SanitizedContent, Technology, ValidationError, ValidationSummary,
    };
    pub use crate::error::{FolioError, FolioResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
