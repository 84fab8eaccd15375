//! Error types and handling for ipahostr
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only unrecoverable conditions live here. A bundle without an `Info.plist`
//! is not an error: it is skipped with an operator-facing message and the run
//! continues. A present-but-broken `Info.plist`, on the other hand, indicates
//! build corruption and aborts the whole run.

use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ipahostr operations
#[derive(Error, Diagnostic, Debug)]
pub enum HostrError {
    // Metadata errors
    #[error("Malformed metadata in bundle '{bundle}': {reason}")]
    #[diagnostic(
        code(ipahostr::metadata::malformed),
        help(
            "The bundle's Info.plist exists but could not be parsed. This usually means the build that produced the bundle is corrupt."
        )
    )]
    MetadataMalformed { bundle: String, reason: String },

    #[error("Bundle '{bundle}' metadata is missing required key '{key}'")]
    #[diagnostic(
        code(ipahostr::metadata::key_missing),
        help("Info.plist must contain CFBundleIdentifier and CFBundleShortVersionString")
    )]
    MetadataKeyMissing { bundle: String, key: String },

    // Scanner errors
    #[error("Two bundles derive the same short name '{name}'")]
    #[diagnostic(
        code(ipahostr::scan::duplicate_name),
        help(
            "Bundles with colliding short names would overwrite each other's output directory. Rename one of them."
        )
    )]
    DuplicateBundleName { name: String },

    // Build I/O errors
    #[error("Failed to read '{path}': {reason}")]
    #[diagnostic(code(ipahostr::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write '{path}': {reason}")]
    #[diagnostic(code(ipahostr::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to archive bundle '{bundle}': {reason}")]
    #[diagnostic(
        code(ipahostr::package::archive_failed),
        help("Check free disk space and that the bundle directory is readable")
    )]
    ArchiveFailed { bundle: String, reason: String },

    // Server errors
    #[error("Failed to bind server on {addr}: {reason}")]
    #[diagnostic(
        code(ipahostr::server::bind_failed),
        help("Another process may already be listening on this port; pass --port to use a different one")
    )]
    ServerBindFailed { addr: String, reason: String },

    // Generic errors
    #[error("IO error: {message}")]
    #[diagnostic(code(ipahostr::io_error))]
    IoError { message: String },
}

/// Creates a read error for a path
pub fn file_read_failed(path: &Path, e: impl std::fmt::Display) -> HostrError {
    HostrError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Creates a write error for a path
pub fn file_write_failed(path: &Path, e: impl std::fmt::Display) -> HostrError {
    HostrError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> HostrError {
    HostrError::IoError {
        message: message.into(),
    }
}

pub type Result<T> = miette::Result<T, HostrError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_read_error_includes_path_and_reason() {
        let err = file_read_failed(&PathBuf::from("/tmp/x"), "denied");
        assert_eq!(err.to_string(), "Failed to read '/tmp/x': denied");
    }

    #[test]
    fn test_io_error_constructor() {
        let err = io_error("no current directory");
        assert!(matches!(err, HostrError::IoError { .. }));
        assert!(err.to_string().contains("no current directory"));
    }
}
