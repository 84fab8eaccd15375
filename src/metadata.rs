//! Metadata extraction from a bundle's embedded Info.plist
//!
//! A missing Info.plist means the bundle is skipped (the run continues); a
//! present but unreadable one aborts the run, since it signals a corrupt
//! build rather than an expected absence.

use plist::Value;

use crate::config;
use crate::error::{HostrError, Result};
use crate::scanner::BundleDescriptor;

const KEY_VERSION: &str = "CFBundleShortVersionString";
const KEY_IDENTIFIER: &str = "CFBundleIdentifier";

/// Identity of an app as recorded in its bundle metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMetadata {
    pub identifier: String,
    pub version: String,
    /// Derived short name of the bundle; used as title and output path.
    pub name: String,
}

/// Read the bundle's metadata. `Ok(None)` means the bundle has no metadata
/// file and must be skipped.
pub fn extract(bundle: &BundleDescriptor) -> Result<Option<AppMetadata>> {
    if !bundle.has_metadata {
        return Ok(None);
    }

    let path = bundle.path.join(config::METADATA_FILE);
    let value = Value::from_file(&path).map_err(|e| HostrError::MetadataMalformed {
        bundle: bundle.name.clone(),
        reason: e.to_string(),
    })?;
    let dict = value
        .as_dictionary()
        .ok_or_else(|| HostrError::MetadataMalformed {
            bundle: bundle.name.clone(),
            reason: "root element is not a dictionary".to_string(),
        })?;

    let version = required_string(dict, KEY_VERSION, &bundle.name)?;
    let identifier = required_string(dict, KEY_IDENTIFIER, &bundle.name)?;

    Ok(Some(AppMetadata {
        identifier,
        version,
        name: bundle.name.clone(),
    }))
}

fn required_string(dict: &plist::Dictionary, key: &str, bundle: &str) -> Result<String> {
    dict.get(key)
        .and_then(Value::as_string)
        .map(str::to_string)
        .ok_or_else(|| HostrError::MetadataKeyMissing {
            bundle: bundle.to_string(),
            key: key.to_string(),
        })
}
