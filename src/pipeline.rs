//! Build pipeline orchestration
//!
//! Scanner → extractor → package builder → manifest generator run per app,
//! sequentially and in discovery order; the catalog is assembled once after
//! all apps, and the static assets are published once before them. The whole
//! phase is skipped when a previous run already produced the output tree.

use console::Style;

use crate::assets;
use crate::catalog::Catalog;
use crate::config::{self, BuildState, ServerConfig};
use crate::error::{Result, file_write_failed};
use crate::manifest::{self, InstallManifest};
use crate::metadata;
use crate::package;
use crate::scanner;

/// What the build phase did, so the caller can decide whether to serve.
#[derive(Debug, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Output tree was already present; nothing was touched.
    AlreadyBuilt,
    /// A fresh output tree was produced.
    Built { published: usize, skipped: usize },
    /// Nothing to build and nothing to serve.
    NoBundles,
}

pub fn run(config: &ServerConfig, state: &BuildState, verbose: bool) -> Result<BuildOutcome> {
    let note = Style::new().bold().cyan();
    let warn = Style::new().bold().yellow();

    if state.already_built {
        println!(
            "{} Found existing '{}' tree, skipping build",
            note.apply_to("==>"),
            config::OUTPUT_ROOT
        );
        return Ok(BuildOutcome::AlreadyBuilt);
    }

    let bundles = scanner::scan(&config.working_dir)?;
    if bundles.is_empty() {
        println!(
            "{} No .{} bundles found in {}",
            warn.apply_to("==>"),
            config::BUNDLE_EXTENSION,
            config.working_dir.display()
        );
        return Ok(BuildOutcome::NoBundles);
    }

    let noun = if bundles.len() == 1 { "app" } else { "apps" };
    println!(
        "{} Found {} {}, generating '{}'",
        note.apply_to("==>"),
        bundles.len(),
        noun,
        config::OUTPUT_ROOT
    );

    let ipa_dir = config.output_root.join(config::IPA_DIR);
    std::fs::create_dir_all(&ipa_dir).map_err(|e| file_write_failed(&ipa_dir, e))?;
    assets::publish(&config.output_root)?;

    let mut catalog = Catalog::new();
    let mut skipped = 0;
    for bundle in &bundles {
        println!("{} Processing {}", note.apply_to("==>"), bundle.name);

        let Some(app_metadata) = metadata::extract(bundle)? else {
            eprintln!(
                "{} {} has no {}, skipping",
                warn.apply_to("warning:"),
                bundle.name,
                config::METADATA_FILE
            );
            skipped += 1;
            continue;
        };

        let app_dir = ipa_dir.join(&bundle.name);
        package::build_archive(bundle, &app_dir, verbose)?;
        manifest::write(&app_dir, &InstallManifest::for_app(&app_metadata, &config.server_url))?;
        catalog.push(&app_metadata);
    }

    println!("{} Writing {}", note.apply_to("==>"), config::CATALOG_FILE);
    catalog.write(&ipa_dir)?;

    Ok(BuildOutcome::Built {
        published: catalog.published_count(),
        skipped,
    })
}
