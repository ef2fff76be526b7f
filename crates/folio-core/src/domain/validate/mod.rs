//! Content validation: the category validators and the umbrella audit.
//!
//! Everything here is pure. Validators take untrusted `serde_json::Value`
//! input and return reports; they never do I/O, never panic on malformed
//! content, and never return `Err` for it either.

mod experience;
pub mod path;
mod profile;
mod project;
mod quick_link;
mod rules;

pub use path::FieldPath;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::entities::{Experience, ProfileInfo, Project, QuickLink};
use crate::domain::report::{Report, ValidationError, ValidationSummary};

// ── Untrusted input ──────────────────────────────────────────────────────

/// The four content categories as loaded from disk, before validation.
///
/// Each slot is raw JSON; `None` means the source had no file for that
/// category, which is not an error — the audit simply skips it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawContent {
    pub profile: Option<Value>,
    pub quick_links: Option<Value>,
    pub experiences: Option<Value>,
    pub projects: Option<Value>,
}

impl RawContent {
    /// True when no category is present at all.
    pub fn is_empty(&self) -> bool {
        self.profile.is_none()
            && self.quick_links.is_none()
            && self.experiences.is_none()
            && self.projects.is_none()
    }
}

// ── Validator ────────────────────────────────────────────────────────────

/// Stateless facade over the per-category validators.
///
/// All operations are associated functions: validation has no
/// configuration and no state to carry.
pub struct ContentValidator;

impl ContentValidator {
    /// Validate and sanitize profile content. The report always carries a
    /// sanitized profile (with documented defaults filled in) unless the
    /// input is not an object.
    pub fn validate_profile(input: &Value) -> Report<ProfileInfo> {
        profile::validate_profile(input)
    }

    /// Validate and sanitize the quick-links list. Elements are checked
    /// independently; failing ones are reported and dropped.
    pub fn validate_quick_links(input: &Value) -> Report<Vec<QuickLink>> {
        quick_link::validate_quick_links(input)
    }

    /// Validate and sanitize the experience timeline.
    pub fn validate_experiences(input: &Value) -> Report<Vec<Experience>> {
        experience::validate_experiences(input)
    }

    /// Validate and sanitize the projects gallery.
    pub fn validate_projects(input: &Value) -> Report<Vec<Project>> {
        project::validate_projects(input)
    }

    /// Run every present category and aggregate. Never short-circuits: a
    /// failing category still lets the others run, so one audit reports
    /// everything wrong with the content at once.
    pub fn validate_all(content: &RawContent) -> ContentAudit {
        let profile = content.profile.as_ref().map(Self::validate_profile);
        let quick_links = content.quick_links.as_ref().map(Self::validate_quick_links);
        let experiences = content.experiences.as_ref().map(Self::validate_experiences);
        let projects = content.projects.as_ref().map(Self::validate_projects);

        let mut errors = Vec::new();
        for report_errors in [
            profile.as_ref().map(|r| &r.errors),
            quick_links.as_ref().map(|r| &r.errors),
            experiences.as_ref().map(|r| &r.errors),
            projects.as_ref().map(|r| &r.errors),
        ]
        .into_iter()
        .flatten()
        {
            errors.extend(report_errors.iter().cloned());
        }

        // A category's sanitized slice is exposed only when that category
        // is fully valid; partially-valid output is available separately
        // via `best_effort`.
        let sanitized = SanitizedContent {
            profile: profile
                .as_ref()
                .filter(|r| r.is_valid)
                .and_then(|r| r.sanitized.clone()),
            quick_links: quick_links
                .as_ref()
                .filter(|r| r.is_valid)
                .and_then(|r| r.sanitized.clone()),
            experiences: experiences
                .as_ref()
                .filter(|r| r.is_valid)
                .and_then(|r| r.sanitized.clone()),
            projects: projects
                .as_ref()
                .filter(|r| r.is_valid)
                .and_then(|r| r.sanitized.clone()),
        };

        ContentAudit {
            run_id: Uuid::new_v4(),
            checked_at: Utc::now(),
            is_valid: errors.is_empty(),
            errors,
            profile,
            quick_links,
            experiences,
            projects,
            sanitized,
        }
    }
}

// ── Audit output ─────────────────────────────────────────────────────────

/// Sanitized content across categories. `None` per slot means the
/// category was absent from the input, or (in strict audit output) that
/// it failed validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_links: Option<Vec<QuickLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiences: Option<Vec<Experience>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
}

/// The outcome of one umbrella validation run.
///
/// `run_id` and `checked_at` are provenance: audits end up in logs and
/// JSON output, and two runs over changing content need telling apart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAudit {
    pub run_id: Uuid,
    pub checked_at: DateTime<Utc>,
    pub is_valid: bool,
    /// Every violation across all categories, in category order.
    pub errors: Vec<ValidationError>,
    pub profile: Option<Report<ProfileInfo>>,
    pub quick_links: Option<Report<Vec<QuickLink>>>,
    pub experiences: Option<Report<Vec<Experience>>>,
    pub projects: Option<Report<Vec<Project>>>,
    /// Strict output: only fully-valid categories appear.
    pub sanitized: SanitizedContent,
}

impl ContentAudit {
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary::from_errors(&self.errors)
    }

    /// Best-effort sanitized content: whatever each category validator
    /// could salvage, valid or not. This is what `show` renders.
    pub fn best_effort(&self) -> SanitizedContent {
        SanitizedContent {
            profile: self.profile.as_ref().and_then(|r| r.sanitized.clone()),
            quick_links: self.quick_links.as_ref().and_then(|r| r.sanitized.clone()),
            experiences: self.experiences.as_ref().and_then(|r| r.sanitized.clone()),
            projects: self.projects.as_ref().and_then(|r| r.sanitized.clone()),
        }
    }
}

/// Emit one warn event per violation plus a closing count, under the
/// given context label. Quiet when there is nothing to report.
pub fn log_errors(errors: &[ValidationError], context: &str) {
    if errors.is_empty() {
        return;
    }
    for error in errors {
        tracing::warn!(
            context,
            kind = %error.kind,
            field = %error.field,
            value = %error.value,
            "{}", error.message
        );
    }
    tracing::warn!(context, error_count = errors.len(), "content validation found errors");
}
