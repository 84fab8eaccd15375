//! Bundle discovery
//!
//! Enumerates `.app` directories in the working directory. Order follows
//! filesystem enumeration order, which is not stable across platforms.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::config;
use crate::error::{HostrError, Result, file_read_failed};

/// A discovered application bundle, before any validation of its contents.
#[derive(Debug, Clone)]
pub struct BundleDescriptor {
    /// Path to the bundle directory.
    pub path: PathBuf,
    /// Directory name minus the `.app` extension; names output paths and URLs.
    pub name: String,
    /// Whether the bundle carries an `Info.plist` at its root.
    pub has_metadata: bool,
}

/// Enumerate candidate bundles in `dir`.
pub fn scan(dir: &Path) -> Result<Vec<BundleDescriptor>> {
    let entries = std::fs::read_dir(dir).map_err(|e| file_read_failed(dir, e))?;

    let mut bundles = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| file_read_failed(dir, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path.extension().and_then(OsStr::to_str) != Some(config::BUNDLE_EXTENSION) {
            continue;
        }
        let Some(name) = path.file_stem().and_then(OsStr::to_str) else {
            continue;
        };
        bundles.push(BundleDescriptor {
            name: name.to_string(),
            has_metadata: path.join(config::METADATA_FILE).is_file(),
            path,
        });
    }

    reject_duplicates(&bundles)?;
    Ok(bundles)
}

/// Colliding short names would overwrite each other's output directory and
/// produce ambiguous catalog entries, so they are rejected up front.
fn reject_duplicates(bundles: &[BundleDescriptor]) -> Result<()> {
    let mut seen = HashSet::new();
    for bundle in bundles {
        if !seen.insert(bundle.name.as_str()) {
            return Err(HostrError::DuplicateBundleName {
                name: bundle.name.clone(),
            });
        }
    }
    Ok(())
}
