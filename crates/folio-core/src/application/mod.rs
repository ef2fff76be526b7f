//! Application layer for Folio.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (AuditService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All validation rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::AuditService;

// Re-export port traits (for adapter implementation)
pub use ports::ContentSource;

pub use error::ApplicationError;
