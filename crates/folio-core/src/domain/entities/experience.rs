//! Experience timeline entries.

use serde::{Deserialize, Serialize};

use super::common::Technology;

/// One position on the experience timeline.
///
/// Dates are stored as the wire strings they were validated from:
/// `start_date` is always `YYYY-MM`; `end_date` is `YYYY-MM` or the
/// literal `"Present"` for a current position. They are deliberately not
/// parsed into a calendar type — the rendering layer displays them
/// verbatim and ordering is handled upstream by the content author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<Technology>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Experience {
    /// Whether this is the author's current position.
    pub fn is_current(&self) -> bool {
        self.end_date == "Present"
    }
}
