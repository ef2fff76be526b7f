//! Filesystem content source: one file per category in a content directory.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};
use walkdir::WalkDir;

use folio_core::{
    application::{ApplicationError, ports::ContentSource},
    domain::RawContent,
    error::{FolioError, FolioResult},
};

/// The file stems the loader recognizes, one per content category.
pub const CATEGORY_STEMS: [&str; 4] = ["profile", "quick_links", "experiences", "projects"];

/// Production content source reading `<dir>/<category>.{json,toml}`.
///
/// Files are discovered, not configured: any of the four category stems
/// present in the directory is loaded, the rest stay `None`. Other files
/// in the directory are ignored.
#[derive(Debug, Clone)]
pub struct FileContentSource {
    dir: PathBuf,
}

impl FileContentSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_value(&self, path: &Path) -> FolioResult<Value> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ApplicationError::SourceUnavailable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => {
                serde_json::from_str(&text).map_err(|e| parse_failed(path, e.to_string()))
            }
            Some("toml") => {
                let value: toml::Value =
                    toml::from_str(&text).map_err(|e| parse_failed(path, e.to_string()))?;
                let json = serde_json::to_value(value)
                    .map_err(|e| parse_failed(path, e.to_string()))?;
                Ok(unwrap_items(json))
            }
            _ => Err(ApplicationError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
            .into()),
        }
    }
}

/// TOML has no top-level arrays, so list categories are written as
/// `[[items]]` tables. A table holding exactly the `items` key unwraps to
/// that array; anything else is used as-is.
fn unwrap_items(value: Value) -> Value {
    match value {
        Value::Object(map) if map.len() == 1 && map.contains_key("items") => {
            map.into_iter().next().map(|(_, v)| v).unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn parse_failed(path: &Path, reason: String) -> FolioError {
    ApplicationError::ParseFailed {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

impl ContentSource for FileContentSource {
    fn load(&self) -> FolioResult<RawContent> {
        if !self.dir.is_dir() {
            return Err(ApplicationError::SourceUnavailable {
                path: self.dir.clone(),
                reason: "not a directory".into(),
            }
            .into());
        }

        let mut content = RawContent::default();
        for entry in WalkDir::new(&self.dir)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !CATEGORY_STEMS.contains(&stem) {
                continue;
            }

            let slot = match stem {
                "profile" => &mut content.profile,
                "quick_links" => &mut content.quick_links,
                "experiences" => &mut content.experiences,
                _ => &mut content.projects,
            };
            if slot.is_some() {
                // Both a .json and a .toml for the same category; the
                // first one discovered wins.
                warn!(path = %path.display(), "duplicate content file ignored");
                continue;
            }

            debug!(path = %path.display(), category = stem, "loading content file");
            *slot = Some(self.read_value(path)?);
        }
        Ok(content)
    }

    fn describe(&self) -> String {
        format!("content directory {}", self.dir.display())
    }
}
