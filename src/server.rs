//! Serving daemon: static HTTP access to the output tree
//!
//! GET and HEAD only, directory-rooted path resolution, content type
//! inferred from the file extension. Runs until the process is killed;
//! there is no graceful-shutdown hook.

use std::fs::File;
use std::path::{Path, PathBuf};

use console::Style;
use tiny_http::{Method, Request, Response, Server};

use crate::assets;
use crate::config::ServerConfig;
use crate::error::{HostrError, Result};

/// Bind the configured port and serve the output tree until terminated.
pub fn serve(config: &ServerConfig) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.port);
    let server = Server::http(&addr).map_err(|e| HostrError::ServerBindFailed {
        addr: addr.clone(),
        reason: e.to_string(),
    })?;

    println!(
        "{} http://{}/",
        Style::new().bold().green().apply_to("Serving at"),
        addr
    );

    serve_requests(server, config.output_root.clone());
    Ok(())
}

/// Accept loop. Requests are independent and read-only, so each one is
/// answered to completion before the next is taken.
fn serve_requests(server: Server, root: PathBuf) {
    for request in server.incoming_requests() {
        respond(&root, request);
    }
}

fn respond(root: &Path, request: Request) {
    let head_only = *request.method() == Method::Head;
    if !head_only && *request.method() != Method::Get {
        let _ = request.respond(Response::empty(405));
        return;
    }

    let Some(path) = resolve_path(root, request.url()) else {
        let _ = request.respond(Response::empty(404));
        return;
    };
    let Ok(file) = File::open(&path) else {
        let _ = request.respond(Response::empty(404));
        return;
    };

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    let content_type =
        tiny_http::Header::from_bytes(&b"Content-Type"[..], mime.as_ref().as_bytes());

    // HEAD resolves like GET but answers with headers only.
    if head_only {
        let mut response = Response::empty(200);
        if let Ok(header) = content_type {
            response.add_header(header);
        }
        let _ = request.respond(response);
        return;
    }

    let mut response = Response::from_file(file);
    if let Ok(header) = content_type {
        response.add_header(header);
    }
    let _ = request.respond(response);
}

/// Map a request URL to a file inside `root`. Returns `None` for anything
/// that escapes the root or does not name an existing file. A directory
/// resolves to its `index.html`.
fn resolve_path(root: &Path, url: &str) -> Option<PathBuf> {
    let raw = url.split(['?', '#']).next().unwrap_or(url);
    let decoded = urlencoding::decode(raw).ok()?;

    let mut resolved = root.to_path_buf();
    for segment in decoded.trim_start_matches('/').split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." || segment.contains('\\') {
            return None;
        }
        resolved.push(segment);
    }

    if resolved.is_dir() {
        resolved.push(assets::INDEX_FILE);
    }
    resolved.is_file().then_some(resolved)
}
