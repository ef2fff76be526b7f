use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TechCategory;

/// An image reference with mandatory alt text.
///
/// Invariant (enforced by the validator, not the type): `src` and `alt`
/// are non-empty after trimming. `placeholder` is an optional inline
/// low-fi stand-in (typically a data URI) and is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub src: String,
    pub alt: String,
    pub placeholder: Option<String>,
}

impl ImageAsset {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// A single technology tag (React, PostgreSQL, Docker, …).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    pub category: TechCategory,
}

impl Technology {
    pub fn new(name: impl Into<String>, category: TechCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}
