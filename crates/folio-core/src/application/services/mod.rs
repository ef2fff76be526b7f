//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "audit the content directory".

pub mod audit_service;

pub use audit_service::AuditService;
