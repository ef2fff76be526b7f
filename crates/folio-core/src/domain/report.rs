//! Validation reports: the error taxonomy, individual violations, and the
//! per-category report shape.
//!
//! Violations are **data, not exceptions**. No validator ever returns
//! `Err` or panics for malformed content; every problem it finds becomes a
//! [`ValidationError`] in the report, and a best-effort sanitized value is
//! produced alongside whenever one can be.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::validate::FieldPath;

/// The fixed violation taxonomy. One tag per violation class.
///
/// Serialized in SCREAMING_SNAKE_CASE to match the wire form consumers of
/// the JSON report expect (`MISSING_REQUIRED_FIELD`, …).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error, Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    #[error("MISSING_REQUIRED_FIELD")]
    MissingRequiredField,
    #[error("INVALID_TYPE")]
    InvalidType,
    #[error("INVALID_FORMAT")]
    InvalidFormat,
    #[error("INVALID_ENUM_VALUE")]
    InvalidEnumValue,
    #[error("INVALID_URL")]
    InvalidUrl,
    #[error("INVALID_DATE")]
    InvalidDate,
}

/// A single violation, pinned to exactly one field path.
///
/// `value` is a clone of the offending input (or `Null` when the field was
/// absent) so a report is self-contained: no need to go back to the source
/// to see what was wrong.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub field: FieldPath,
    pub message: String,
    pub value: Value,
    pub timestamp: DateTime<Utc>,
}

impl ValidationError {
    pub fn new(
        kind: ErrorKind,
        field: FieldPath,
        message: impl Into<String>,
        value: &Value,
    ) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
            value: value.clone(),
            timestamp: Utc::now(),
        }
    }

    /// Shorthand for violations on absent fields, where there is no
    /// offending value to capture.
    pub fn absent(kind: ErrorKind, field: FieldPath, message: impl Into<String>) -> Self {
        Self::new(kind, field, message, &Value::Null)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.field, self.message)
    }
}

/// Outcome of validating one content category.
///
/// Invariant: `is_valid == errors.is_empty()`, enforced at construction.
///
/// `sanitized` holds a best-effort cleaned value:
/// - singular content (profile): `Some` with defaults applied unless the
///   top-level shape was wrong, in which case `None`;
/// - list content: always `Some` — an empty vec when the top-level shape
///   was wrong, otherwise the surviving elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<T> {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    #[serde(rename = "sanitizedData")]
    pub sanitized: Option<T>,
}

impl<T> Report<T> {
    pub fn new(errors: Vec<ValidationError>, sanitized: Option<T>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            sanitized,
        }
    }

    /// One-error report for a category whose top-level shape was wrong.
    pub fn rejected(error: ValidationError, sanitized: Option<T>) -> Self {
        Self::new(vec![error], sanitized)
    }

    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary::from_errors(&self.errors)
    }
}

/// Aggregate statistics over a set of violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub status: SummaryStatus,
    pub message: String,
    pub error_count: usize,
    /// Per-kind counts; only present kinds appear. BTreeMap keeps the
    /// serialized order deterministic.
    pub errors_by_kind: BTreeMap<ErrorKind, usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStatus {
    Success,
    Error,
}

impl ValidationSummary {
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        if errors.is_empty() {
            return Self {
                status: SummaryStatus::Success,
                message: "All content validation passed".to_string(),
                error_count: 0,
                errors_by_kind: BTreeMap::new(),
            };
        }

        let mut by_kind = BTreeMap::new();
        for error in errors {
            *by_kind.entry(error.kind).or_insert(0) += 1;
        }

        Self {
            status: SummaryStatus::Error,
            message: format!("Content validation failed with {} error(s)", errors.len()),
            error_count: errors.len(),
            errors_by_kind: by_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn err(kind: ErrorKind) -> ValidationError {
        ValidationError::absent(kind, FieldPath::root("field"), "test violation")
    }

    #[test]
    fn report_validity_tracks_errors() {
        let ok: Report<()> = Report::new(vec![], None);
        assert!(ok.is_valid);

        let bad: Report<()> = Report::new(vec![err(ErrorKind::InvalidType)], None);
        assert!(!bad.is_valid);
    }

    #[test]
    fn error_kind_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_value(ErrorKind::MissingRequiredField).unwrap(),
            json!("MISSING_REQUIRED_FIELD")
        );
        assert_eq!(
            serde_json::to_value(ErrorKind::InvalidUrl).unwrap(),
            json!("INVALID_URL")
        );
    }

    #[test]
    fn validation_error_captures_offending_value() {
        let value = json!(42);
        let e = ValidationError::new(
            ErrorKind::InvalidType,
            FieldPath::root("name"),
            "name must be a string",
            &value,
        );
        assert_eq!(e.value, json!(42));
        assert_eq!(e.field.as_str(), "name");
    }

    #[test]
    fn summary_counts_by_kind() {
        let errors = vec![
            err(ErrorKind::InvalidUrl),
            err(ErrorKind::InvalidUrl),
            err(ErrorKind::MissingRequiredField),
        ];
        let summary = ValidationSummary::from_errors(&errors);
        assert_eq!(summary.status, SummaryStatus::Error);
        assert_eq!(summary.error_count, 3);
        assert_eq!(summary.errors_by_kind[&ErrorKind::InvalidUrl], 2);
        assert_eq!(summary.errors_by_kind[&ErrorKind::MissingRequiredField], 1);
    }

    #[test]
    fn empty_summary_is_success() {
        let summary = ValidationSummary::from_errors(&[]);
        assert_eq!(summary.status, SummaryStatus::Success);
        assert_eq!(summary.error_count, 0);
    }
}
