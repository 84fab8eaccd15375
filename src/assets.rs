//! Static presentation assets
//!
//! The index page, stylesheet and client script are compiled into the binary
//! from `assets/` so the tool stays a single portable artifact. They are
//! written to the output root once, during the build phase only.

use std::path::Path;

use crate::error::{Result, file_write_failed};

pub const INDEX_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = "ipahostr.css";
pub const SCRIPT_FILE: &str = "ipahostr.js";

const INDEX_PAGE: &str = include_str!("../assets/index.html");
const STYLESHEET: &str = include_str!("../assets/ipahostr.css");
const CLIENT_SCRIPT: &str = include_str!("../assets/ipahostr.js");

/// Write the three fixed assets into `output_root`.
pub fn publish(output_root: &Path) -> Result<()> {
    for (name, content) in [
        (INDEX_FILE, INDEX_PAGE),
        (STYLESHEET_FILE, STYLESHEET),
        (SCRIPT_FILE, CLIENT_SCRIPT),
    ] {
        let path = output_root.join(name);
        std::fs::write(&path, content).map_err(|e| file_write_failed(&path, e))?;
    }
    Ok(())
}
