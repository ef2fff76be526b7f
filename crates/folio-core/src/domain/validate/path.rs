//! Field paths: dotted/bracketed locators for validated values.
//!
//! A path like `experiences[2].technologies[0].name` pins a violation to
//! one value inside nested input without needing source positions. Paths
//! are built incrementally as the validators descend, so every error is
//! born with the right locator.

use std::fmt;

use serde::Serialize;

/// A dotted/bracketed field locator.
///
/// Invariant: never contains empty segments. The root may be empty —
/// profile validation reports bare field names (`title`, `headshot.src`)
/// rather than prefixing every path with the category name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    /// The empty root: children of this path render without a prefix.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// A named root, e.g. `quickLinks`.
    pub fn root(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Descend into a named key: `a` → `a.b` (or bare `b` from the empty
    /// root).
    pub fn key(&self, name: &str) -> Self {
        debug_assert!(!name.is_empty(), "field path keys must be non-empty");
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    /// Descend into a list element: `a` → `a[3]`.
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{i}]", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        Self::root(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_keys_join_with_dots() {
        let path = FieldPath::root("headshot").key("src");
        assert_eq!(path.as_str(), "headshot.src");
    }

    #[test]
    fn empty_root_yields_bare_names() {
        let path = FieldPath::empty().key("title");
        assert_eq!(path.as_str(), "title");
    }

    #[test]
    fn indices_use_brackets() {
        let path = FieldPath::root("experiences")
            .index(2)
            .key("technologies")
            .index(0)
            .key("name");
        assert_eq!(path.as_str(), "experiences[2].technologies[0].name");
    }

    #[test]
    fn serializes_as_plain_string() {
        let path = FieldPath::root("projects").index(1).key("status");
        assert_eq!(
            serde_json::to_value(&path).unwrap(),
            serde_json::json!("projects[1].status")
        );
    }
}
