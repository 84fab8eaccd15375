//! ipahostr - over-the-air app publisher
//!
//! Converts locally built .app bundles into installable .ipa archives with
//! OTA install manifests, then serves the result over HTTP so devices on the
//! same network can install them.

use clap::Parser;

mod assets;
mod catalog;
mod cli;
mod config;
mod error;
mod manifest;
mod metadata;
mod package;
mod pipeline;
mod scanner;
mod server;

use cli::Cli;
use config::{BuildState, ServerConfig};
use error::Result;
use pipeline::BuildOutcome;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ServerConfig::from_cli(cli)?;
    let state = BuildState::detect(&config.output_root);

    match pipeline::run(&config, &state, cli.verbose)? {
        // Nothing built and nothing to serve.
        BuildOutcome::NoBundles => return Ok(()),
        BuildOutcome::AlreadyBuilt | BuildOutcome::Built { .. } => {}
    }

    if cli.build_only {
        return Ok(());
    }

    server::serve(&config)
}
