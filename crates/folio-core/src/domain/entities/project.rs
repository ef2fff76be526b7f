//! Project gallery entries.

use serde::{Deserialize, Serialize};

use super::common::{ImageAsset, Technology};
use crate::domain::value_objects::{ProjectLinkKind, ProjectStatus};

/// One card in the projects gallery.
///
/// `category` is free-form display text ("Full Stack", "Frontend", …),
/// not an enumeration — unlike `status`, which is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub image: ImageAsset,
    pub technologies: Vec<Technology>,
    pub links: Vec<ProjectLink>,
    pub category: String,
    pub featured: bool,
    pub status: ProjectStatus,
}

/// An outbound link attached to a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    #[serde(rename = "type")]
    pub kind: ProjectLinkKind,
    pub url: String,
    pub label: String,
}
