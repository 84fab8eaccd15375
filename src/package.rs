//! Package building: turns a validated bundle into an installable archive
//!
//! The installer format requires the archive's root entry to be a `Payload`
//! directory containing the original bundle. The bundle is copied into a
//! temporary staging directory with that layout and the staging root is then
//! compressed. The staging directory is a [`TempDir`], so it is removed when
//! it goes out of scope even if compression fails.

use std::fs::File;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;

use crate::config;
use crate::error::{HostrError, Result, file_read_failed, file_write_failed, io_error};
use crate::scanner::BundleDescriptor;

/// Root directory segment the installer expects inside the archive.
pub const ARCHIVE_ROOT_DIR: &str = "Payload";

/// Build `<name>.ipa` (and `icon.png`, when the bundle ships one) under
/// `app_dir`. Returns the archive path.
pub fn build_archive(bundle: &BundleDescriptor, app_dir: &Path, verbose: bool) -> Result<PathBuf> {
    std::fs::create_dir_all(app_dir).map_err(|e| file_write_failed(app_dir, e))?;

    copy_icon(bundle, app_dir)?;

    let staging = TempDir::new()
        .map_err(|e| io_error(format!("Failed to create staging directory: {}", e)))?;

    let bundle_dir_name = bundle
        .path
        .file_name()
        .ok_or_else(|| io_error(format!("Bundle path has no name: {}", bundle.path.display())))?;
    let staged_bundle = staging.path().join(ARCHIVE_ROOT_DIR).join(bundle_dir_name);
    copy_tree(&bundle.path, &staged_bundle, verbose)?;

    let archive_path = app_dir.join(format!("{}.{}", bundle.name, config::ARCHIVE_EXTENSION));
    write_zip(staging.path(), &archive_path, &bundle.name)?;

    Ok(archive_path)
}

/// Copy the bundle's icon to its published name. Absence is not an error.
fn copy_icon(bundle: &BundleDescriptor, app_dir: &Path) -> Result<()> {
    let source = bundle.path.join(config::ICON_SOURCE);
    if !source.is_file() {
        return Ok(());
    }
    let target = app_dir.join(config::ICON_TARGET);
    std::fs::copy(&source, &target)
        .map(|_| ())
        .map_err(|e| file_write_failed(&target, e))
}

/// Recursively copy `source` into `target`, preserving the directory layout.
fn copy_tree(source: &Path, target: &Path, verbose: bool) -> Result<()> {
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| file_read_failed(source, e))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| io_error(format!("Path outside staging root: {}", e)))?;
        let dest = target.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest).map_err(|e| file_write_failed(&dest, e))?;
        } else {
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent).map_err(|e| file_write_failed(parent, e))?;
            }
            std::fs::copy(entry.path(), &dest).map_err(|e| file_write_failed(&dest, e))?;
            if verbose {
                println!("    {}", relative.display());
            }
        }
    }
    Ok(())
}

/// Compress the contents of `root` into a zip archive at `archive_path`.
fn write_zip(root: &Path, archive_path: &Path, bundle_name: &str) -> Result<()> {
    let archive_failed = |reason: String| HostrError::ArchiveFailed {
        bundle: bundle_name.to_string(),
        reason,
    };

    let file = File::create(archive_path).map_err(|e| archive_failed(e.to_string()))?;
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o755);

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| archive_failed(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| archive_failed(e.to_string()))?;
        // Zip entry names always use forward slashes.
        let name = relative
            .to_str()
            .ok_or_else(|| archive_failed(format!("Non-UTF-8 path: {}", relative.display())))?
            .replace('\\', "/");
        if name.is_empty() {
            continue;
        }

        if entry.file_type().is_dir() {
            writer
                .add_directory(format!("{}/", name), options)
                .map_err(|e| archive_failed(e.to_string()))?;
        } else {
            writer
                .start_file(name, options)
                .map_err(|e| archive_failed(e.to_string()))?;
            let mut source = File::open(entry.path()).map_err(|e| archive_failed(e.to_string()))?;
            std::io::copy(&mut source, &mut writer).map_err(|e| archive_failed(e.to_string()))?;
        }
    }

    writer.finish().map_err(|e| archive_failed(e.to_string()))?;
    Ok(())
}
