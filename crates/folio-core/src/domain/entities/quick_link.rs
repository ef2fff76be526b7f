use serde::{Deserialize, Serialize};

use crate::domain::value_objects::LinkKind;

/// A single quick link: an external profile, a contact URI, or a
/// downloadable asset, rendered as a clickable icon.
///
/// `url` is an absolute URL, a root-relative path (`/resume.pdf`), or a
/// `mailto:` URI. `external` marks links that should open in a new
/// browsing context; it is an explicit flag rather than being derived
/// from the URL because same-origin absolute URLs exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub id: String,
    pub label: String,
    pub url: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: LinkKind,
    pub external: bool,
}
