//! Runtime configuration and layout constants
//!
//! Everything the original tool hard-coded lives here as a named constant,
//! and the values an operator can override are gathered into [`ServerConfig`]
//! once at startup instead of being probed ad hoc by each component.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{Result, io_error};

/// Default serving port, kept from the original tool.
pub const DEFAULT_PORT: u16 = 19494;

/// Name of the output tree written next to the scanned bundles.
pub const OUTPUT_ROOT: &str = "ipahostr";

/// Subdirectory of the output tree holding per-app directories.
pub const IPA_DIR: &str = "ipa";

/// Extension that marks a directory as an application bundle.
pub const BUNDLE_EXTENSION: &str = "app";

/// Extension of the produced installer archives.
pub const ARCHIVE_EXTENSION: &str = "ipa";

/// Metadata file expected inside each bundle.
pub const METADATA_FILE: &str = "Info.plist";

/// Conventional icon path inside a bundle, and its published name.
pub const ICON_SOURCE: &str = "Icon-60@2x.png";
pub const ICON_TARGET: &str = "icon.png";

/// Catalog file consumed by the client script.
pub const CATALOG_FILE: &str = "contents.json";

/// Per-app OTA install descriptor.
pub const MANIFEST_FILE: &str = "manifest.plist";

/// Resolved runtime configuration, computed once from CLI arguments.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory scanned for bundles; the output tree is created inside it.
    pub working_dir: PathBuf,
    /// `working_dir`/`ipahostr`
    pub output_root: PathBuf,
    /// Port the serving daemon binds.
    pub port: u16,
    /// Base URL prepended to manifest asset links, without trailing slash.
    pub server_url: String,
}

impl ServerConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let working_dir = match &cli.dir {
            Some(path) => path.clone(),
            None => std::env::current_dir()
                .map_err(|e| io_error(format!("Failed to get current directory: {}", e)))?,
        };

        let server_url = cli
            .server_url
            .clone()
            .unwrap_or_else(|| default_server_url(cli.port))
            .trim_end_matches('/')
            .to_string();

        let output_root = working_dir.join(OUTPUT_ROOT);

        Ok(Self {
            working_dir,
            output_root,
            port: cli.port,
            server_url,
        })
    }
}

/// Default manifest base URL: the host's routable IPv4 address plus the port.
fn default_server_url(port: u16) -> String {
    let host = local_ipv4()
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "127.0.0.1".to_string());
    format!("http://{}:{}", host, port)
}

/// Asks the routing table which local address would reach the internet.
/// Connecting a UDP socket sends no packets.
fn local_ipv4() -> Option<Ipv4Addr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    match socket.local_addr().ok()?.ip() {
        IpAddr::V4(ip) => Some(ip),
        IpAddr::V6(_) => None,
    }
}

/// Whether a previous run already produced the output tree.
///
/// Computed once at startup and threaded through the pipeline; presence of
/// the tree means the build phase is skipped entirely.
#[derive(Debug, Clone, Copy)]
pub struct BuildState {
    pub already_built: bool,
}

impl BuildState {
    pub fn detect(output_root: &Path) -> Self {
        Self {
            already_built: output_root.is_dir(),
        }
    }
}
