//! OTA install manifest generation
//!
//! The installer client fetches `manifest.plist` through an
//! `itms-services://` link and expects the exact field names and nesting
//! below. The structs mirror that contract one to one.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{Result, file_write_failed};
use crate::metadata::AppMetadata;

const ASSET_KIND: &str = "software-package";
const METADATA_KIND: &str = "software";

#[derive(Debug, Serialize, Deserialize)]
pub struct InstallManifest {
    pub items: Vec<ManifestItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ManifestItem {
    pub assets: Vec<ManifestAsset>,
    pub metadata: ManifestMetadata,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ManifestAsset {
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ManifestMetadata {
    pub bundle_identifier: String,
    pub bundle_version: String,
    pub kind: String,
    pub title: String,
}

impl InstallManifest {
    /// Build the manifest for one app. The archive URL path is derived from
    /// the app name, percent-encoded so names with spaces or reserved
    /// characters still yield a valid URL.
    pub fn for_app(metadata: &AppMetadata, server_url: &str) -> Self {
        let encoded = urlencoding::encode(&metadata.name);
        let url = format!(
            "{}/{}/{}/{}.{}",
            server_url,
            config::IPA_DIR,
            encoded,
            encoded,
            config::ARCHIVE_EXTENSION
        );

        Self {
            items: vec![ManifestItem {
                assets: vec![ManifestAsset {
                    kind: ASSET_KIND.to_string(),
                    url,
                }],
                metadata: ManifestMetadata {
                    bundle_identifier: metadata.identifier.clone(),
                    bundle_version: metadata.version.clone(),
                    kind: METADATA_KIND.to_string(),
                    title: metadata.name.clone(),
                },
            }],
        }
    }
}

/// Serialize the manifest as an XML plist into the app's output directory.
pub fn write(app_dir: &Path, manifest: &InstallManifest) -> Result<()> {
    let path = app_dir.join(config::MANIFEST_FILE);
    plist::to_file_xml(&path, manifest).map_err(|e| file_write_failed(&path, e))
}
