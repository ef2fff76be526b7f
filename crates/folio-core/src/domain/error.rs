use thiserror::Error;

/// Root domain error type.
///
/// Note the distinction from [`crate::domain::report::ValidationError`]:
/// content violations are *data* (collected into reports, never raised),
/// while `DomainError` covers genuine Rust-level failures such as parsing
/// a string into one of the content enums.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A string did not name any variant of a content enum.
    #[error("unknown {what}: '{value}' (expected one of: {allowed})")]
    UnknownVariant {
        what: &'static str,
        value: String,
        allowed: &'static str,
    },

    /// A field path segment was structurally invalid (empty key, etc.).
    #[error("invalid field path segment: '{segment}'")]
    InvalidPathSegment { segment: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownVariant {
                what,
                value,
                allowed,
            } => vec![
                format!("'{value}' is not a valid {what}"),
                format!("Allowed values: {allowed}"),
            ],
            Self::InvalidPathSegment { segment } => vec![format!(
                "Field path segments must be non-empty identifiers, got '{segment}'"
            )],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownVariant { .. } => ErrorCategory::Validation,
            Self::InvalidPathSegment { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
