//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::config::DEFAULT_PORT;

/// ipahostr - over-the-air app publisher
///
/// Packages local .app bundles as installable .ipa archives and serves them
/// on the local network.
#[derive(Parser, Debug)]
#[command(
    name = "ipahostr",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Package .app bundles as .ipa archives and host them over the air",
    long_about = "ipahostr scans the working directory for .app bundles, packages each one as \
                  an installable .ipa archive with an OTA manifest, and serves the result over \
                  HTTP for installation from a device on the same network. If an 'ipahostr' \
                  output directory already exists, the build is skipped and serving starts \
                  immediately.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  ipahostr\n    \
                  ipahostr http://192.168.1.20:19494\n    \
                  ipahostr --port 8080\n    \
                  ipahostr --build-only\n\n\
                  \x1b[1m\x1b[32mNote:\x1b[0m\n    \
                  Delete the 'ipahostr' directory to force a full rebuild."
)]
pub struct Cli {
    /// Base URL used in manifest asset links (defaults to this host's address)
    pub server_url: Option<String>,

    /// Port the HTTP server binds
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory to scan for bundles (defaults to current directory)
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,

    /// Run the build phase and exit without serving
    #[arg(long)]
    pub build_only: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
