//! Content value objects: the closed enumerations of the portfolio schema.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! Each one defines its wire string representation (`as_str`), a `Display`
//! impl, and a strict `FromStr` parser.
//!
//! `FromStr` is deliberately **exact and case-sensitive**: it is the
//! instrument the validator uses for enum fields, so `"Scroll"` or
//! `"SCROLL"` must fail the same way they fail in the source content
//! schema. No aliases.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Extend `allowed()` so error messages stay truthful
//! 4. Done — the validators pick the change up automatically

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── CtaAction ────────────────────────────────────────────────────────────────

/// What a call-to-action button does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaAction {
    Scroll,
    Download,
    External,
}

impl CtaAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Download => "download",
            Self::External => "external",
        }
    }

    /// The full allowed set, for error messages.
    pub const fn allowed() -> &'static str {
        "scroll, download, external"
    }
}

impl fmt::Display for CtaAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CtaAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scroll" => Ok(Self::Scroll),
            "download" => Ok(Self::Download),
            "external" => Ok(Self::External),
            other => Err(DomainError::UnknownVariant {
                what: "call-to-action action",
                value: other.to_string(),
                allowed: Self::allowed(),
            }),
        }
    }
}

// ── CtaVariant ───────────────────────────────────────────────────────────────

/// Visual weight of a call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaVariant {
    Primary,
    Secondary,
}

impl CtaVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }

    pub const fn allowed() -> &'static str {
        "primary, secondary"
    }
}

impl fmt::Display for CtaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CtaVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            other => Err(DomainError::UnknownVariant {
                what: "call-to-action variant",
                value: other.to_string(),
                allowed: Self::allowed(),
            }),
        }
    }
}

// ── LinkKind ─────────────────────────────────────────────────────────────────

/// The grouping of a quick link (shown as icon clusters in the UI layer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Social,
    Professional,
    Contact,
}

impl LinkKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Social => "social",
            Self::Professional => "professional",
            Self::Contact => "contact",
        }
    }

    pub const fn allowed() -> &'static str {
        "social, professional, contact"
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "social" => Ok(Self::Social),
            "professional" => Ok(Self::Professional),
            "contact" => Ok(Self::Contact),
            other => Err(DomainError::UnknownVariant {
                what: "quick link type",
                value: other.to_string(),
                allowed: Self::allowed(),
            }),
        }
    }
}

// ── TechCategory ─────────────────────────────────────────────────────────────

/// Classification of a technology used by an experience or project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Language,
    Framework,
    Tool,
    Database,
}

impl TechCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Framework => "framework",
            Self::Tool => "tool",
            Self::Database => "database",
        }
    }

    pub const fn allowed() -> &'static str {
        "language, framework, tool, database"
    }
}

impl fmt::Display for TechCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TechCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "language" => Ok(Self::Language),
            "framework" => Ok(Self::Framework),
            "tool" => Ok(Self::Tool),
            "database" => Ok(Self::Database),
            other => Err(DomainError::UnknownVariant {
                what: "technology category",
                value: other.to_string(),
                allowed: Self::allowed(),
            }),
        }
    }
}

// ── ProjectLinkKind ──────────────────────────────────────────────────────────

/// What a project link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectLinkKind {
    Demo,
    Code,
    Documentation,
}

impl ProjectLinkKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Code => "code",
            Self::Documentation => "documentation",
        }
    }

    pub const fn allowed() -> &'static str {
        "demo, code, documentation"
    }
}

impl fmt::Display for ProjectLinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectLinkKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "demo" => Ok(Self::Demo),
            "code" => Ok(Self::Code),
            "documentation" => Ok(Self::Documentation),
            other => Err(DomainError::UnknownVariant {
                what: "project link type",
                value: other.to_string(),
                allowed: Self::allowed(),
            }),
        }
    }
}

// ── ProjectStatus ────────────────────────────────────────────────────────────

/// Delivery status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        }
    }

    pub const fn allowed() -> &'static str {
        "completed, in-progress, planned"
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Self::Completed),
            "in-progress" => Ok(Self::InProgress),
            "planned" => Ok(Self::Planned),
            other => Err(DomainError::UnknownVariant {
                what: "project status",
                value: other.to_string(),
                allowed: Self::allowed(),
            }),
        }
    }
}
