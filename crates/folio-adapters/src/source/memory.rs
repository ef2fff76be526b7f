//! In-memory content source for testing.

use std::sync::{Arc, RwLock};

use folio_core::{
    application::{ApplicationError, ports::ContentSource},
    domain::RawContent,
    error::FolioResult,
};

/// In-memory content source. Clones share the same underlying content, so
/// a test can keep a handle and swap content under a running service.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentSource {
    inner: Arc<RwLock<RawContent>>,
}

impl MemoryContentSource {
    pub fn new(content: RawContent) -> Self {
        Self {
            inner: Arc::new(RwLock::new(content)),
        }
    }

    /// Replace the stored content (testing helper).
    pub fn set(&self, content: RawContent) {
        if let Ok(mut inner) = self.inner.write() {
            *inner = content;
        }
    }
}

impl ContentSource for MemoryContentSource {
    fn load(&self) -> FolioResult<RawContent> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::SourceLock)?;
        Ok(inner.clone())
    }

    fn describe(&self) -> String {
        "in-memory content".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clones_observe_swapped_content() {
        let source = MemoryContentSource::default();
        let handle = source.clone();
        assert!(source.load().unwrap().is_empty());

        handle.set(RawContent {
            profile: Some(json!({ "name": "Jane" })),
            ..RawContent::default()
        });
        assert!(source.load().unwrap().profile.is_some());
    }
}
