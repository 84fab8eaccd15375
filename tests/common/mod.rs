//! Common test utilities for ipahostr integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A valid Info.plist body for fixtures.
#[allow(dead_code)]
pub fn info_plist(identifier: &str, version: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleIdentifier</key>
    <string>{}</string>
    <key>CFBundleShortVersionString</key>
    <string>{}</string>
</dict>
</plist>
"#,
        identifier, version
    )
}

/// A scratch directory holding .app fixtures, mimicking a build output dir.
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create an .app bundle directory with a dummy binary and resource file.
    /// `metadata` is (identifier, version); `None` omits Info.plist.
    pub fn create_app_bundle(&self, name: &str, metadata: Option<(&str, &str)>) -> PathBuf {
        let bundle = self.path.join(format!("{}.app", name));
        std::fs::create_dir_all(bundle.join("Resources"))
            .expect("Failed to create bundle directory");
        std::fs::write(bundle.join(name), format!("binary for {}", name))
            .expect("Failed to write binary");
        std::fs::write(bundle.join("Resources/strings.txt"), "localized strings")
            .expect("Failed to write resource");
        if let Some((identifier, version)) = metadata {
            std::fs::write(bundle.join("Info.plist"), info_plist(identifier, version))
                .expect("Failed to write Info.plist");
        }
        bundle
    }

    /// Write a file in the workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}
