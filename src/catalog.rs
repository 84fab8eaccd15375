//! Catalog assembly for the client-side app list
//!
//! One entry per successfully published app, in discovery order, serialized
//! as a bare JSON array. The client script polls this file to render the
//! list, so it is written exactly once after all apps are processed.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{Result, file_write_failed};
use crate::metadata::AppMetadata;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, metadata: &AppMetadata) {
        self.entries.push(CatalogEntry {
            name: metadata.name.clone(),
            version: metadata.version.clone(),
        });
    }

    /// Number of apps recorded so far.
    pub fn published_count(&self) -> usize {
        self.entries.len()
    }

    /// Serialize all entries to `contents.json` inside `ipa_dir`.
    pub fn write(&self, ipa_dir: &Path) -> Result<()> {
        let path = ipa_dir.join(config::CATALOG_FILE);
        let file = File::create(&path).map_err(|e| file_write_failed(&path, e))?;
        serde_json::to_writer(file, &self.entries).map_err(|e| file_write_failed(&path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn metadata(name: &str, version: &str) -> AppMetadata {
        AppMetadata {
            identifier: format!("com.x.{}", name.to_lowercase()),
            version: version.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_writes_json_array_in_insertion_order() {
        let temp = TempDir::new().unwrap();
        let mut catalog = Catalog::new();
        catalog.push(&metadata("Foo", "1.0"));
        catalog.push(&metadata("Bar", "2.3"));
        catalog.write(temp.path()).unwrap();

        let raw = std::fs::read_to_string(temp.path().join(config::CATALOG_FILE)).unwrap();
        assert_eq!(
            raw,
            r#"[{"name":"Foo","version":"1.0"},{"name":"Bar","version":"2.3"}]"#
        );
    }

    #[test]
    fn test_empty_catalog_is_empty_array() {
        let temp = TempDir::new().unwrap();
        Catalog::new().write(temp.path()).unwrap();

        let raw = std::fs::read_to_string(temp.path().join(config::CATALOG_FILE)).unwrap();
        assert_eq!(raw, "[]");
    }

    #[test]
    fn test_published_count_tracks_pushes() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.published_count(), 0);
        catalog.push(&metadata("Foo", "1.0"));
        catalog.push(&metadata("Bar", "2.3"));
        assert_eq!(catalog.published_count(), 2);
    }

    #[test]
    fn test_version_is_not_normalized() {
        let temp = TempDir::new().unwrap();
        let mut catalog = Catalog::new();
        catalog.push(&metadata("Foo", "01.20.003"));
        catalog.write(temp.path()).unwrap();

        let entries: Vec<CatalogEntry> = serde_json::from_str(
            &std::fs::read_to_string(temp.path().join(config::CATALOG_FILE)).unwrap(),
        )
        .unwrap();
        assert_eq!(entries[0].version, "01.20.003");
    }
}
