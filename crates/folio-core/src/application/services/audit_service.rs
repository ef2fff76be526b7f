//! Audit Service - main application orchestrator.
//!
//! Coordinates the audit workflow:
//! 1. Load raw content through the `ContentSource` port
//! 2. Run every category validator
//! 3. Log violations and return the audit
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{info, instrument};

use crate::{
    application::ports::ContentSource,
    domain::{ContentAudit, ContentValidator, RawContent, log_errors},
    error::FolioResult,
};

/// Main audit service.
///
/// Owns the content source adapter and runs the umbrella validation over
/// whatever it loads.
pub struct AuditService {
    source: Box<dyn ContentSource>,
}

impl AuditService {
    /// Create a new audit service with the given content source.
    pub fn new(source: Box<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Run a full content audit.
    ///
    /// This is the main use case: load everything the source has, validate
    /// every category, and report. Content violations never surface as
    /// `Err` here; only source failures (unreadable directory, malformed
    /// file syntax) do.
    #[instrument(skip_all, fields(source = %self.source.describe()))]
    pub fn audit(&self) -> FolioResult<ContentAudit> {
        let content = self.source.load()?;
        info!(
            profile = content.profile.is_some(),
            quick_links = content.quick_links.is_some(),
            experiences = content.experiences.is_some(),
            projects = content.projects.is_some(),
            "Content loaded"
        );

        let audit = ContentValidator::validate_all(&content);
        log_errors(&audit.errors, "content audit");
        info!(
            run_id = %audit.run_id,
            valid = audit.is_valid,
            error_count = audit.errors.len(),
            "Audit complete"
        );
        Ok(audit)
    }

    /// Load raw content without validating, for callers that want the
    /// untouched input (e.g. re-serialization).
    pub fn load_raw(&self) -> FolioResult<RawContent> {
        self.source.load()
    }
}
