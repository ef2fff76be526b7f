//! Profile aggregate: the hero-section identity block.
//!
//! Wire shape (camelCase keys, matching the content files):
//!
//! ```json
//! {
//!   "name": "Jane Doe",
//!   "title": "Software Engineer",
//!   "summary": "…",
//!   "headshot": { "src": "/images/headshot.jpg", "alt": "Jane Doe" },
//!   "callToActions": [
//!     { "id": "view-projects", "label": "View My Work",
//!       "action": "scroll", "target": "#projects", "variant": "primary" }
//!   ]
//! }
//! ```
//!
//! Like every content record, instances are constructed by the validator's
//! sanitizer (or deserialized from already-trusted data) and never mutated
//! afterwards.

use serde::{Deserialize, Serialize};

use super::common::ImageAsset;
use crate::domain::value_objects::{CtaAction, CtaVariant};

/// Sanitizer fallbacks for a profile whose required strings are missing.
///
/// These are part of the public contract: a profile report always carries
/// a renderable sanitized value, and these are the documented defaults it
/// falls back to.
pub mod defaults {
    pub const NAME: &str = "Unknown";
    pub const TITLE: &str = "Software Engineer";
    pub const SUMMARY: &str = "Professional software engineer";
    pub const HEADSHOT_SRC: &str = "/images/default-headshot.jpg";
    pub const HEADSHOT_ALT: &str = "Professional headshot";
}

/// Personal identity content for the hero section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub headshot: ImageAsset,
    pub call_to_actions: Vec<CallToAction>,
}

/// A hero-section button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub id: String,
    pub label: String,
    pub action: CtaAction,
    pub variant: CtaVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}
