//! Application layer errors.
//!
//! These errors represent failures reaching or reading content, not
//! content violations. A syntactically broken JSON file is an
//! `ApplicationError`; a well-formed file with a missing `name` field is
//! a `ValidationError` inside a report.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading content for an audit.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The content source could not be reached at all.
    #[error("Content source unavailable at {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    /// A content file exists but could not be parsed.
    #[error("Failed to parse {path}: {reason}")]
    ParseFailed { path: PathBuf, reason: String },

    /// A content file has an extension no loader handles.
    #[error("Unsupported content format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Source access failed (lock poisoned, etc.).
    #[error("Content source error")]
    SourceLock,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceUnavailable { path, .. } => vec![
                format!("Could not read content from: {}", path.display()),
                "Check that the content directory exists and is readable".into(),
                "Run: folio init <dir> to create a starter content directory".into(),
            ],
            Self::ParseFailed { path, reason } => vec![
                format!("File is not well-formed: {}", path.display()),
                format!("Parser said: {}", reason),
                "Fix the syntax error and run the check again".into(),
            ],
            Self::UnsupportedFormat { path } => vec![
                format!("No loader for: {}", path.display()),
                "Content files must be .json or .toml".into(),
            ],
            Self::SourceLock => vec![
                "The content source is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceUnavailable { .. } => ErrorCategory::NotFound,
            Self::ParseFailed { .. } => ErrorCategory::Validation,
            Self::UnsupportedFormat { .. } => ErrorCategory::Configuration,
            Self::SourceLock => ErrorCategory::Internal,
        }
    }
}
