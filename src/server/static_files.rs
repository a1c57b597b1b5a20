//! Files served from the configured static root.

use crate::config::StaticFilesConfig;
use crate::http::mime::content_type_for;
use crate::http::response::Response;
use crate::server::render;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Serves the file named by `path` (which starts with the static prefix).
pub async fn serve(path: &str, cfg: &StaticFilesConfig) -> Response {
    let name = path
        .strip_prefix(cfg.prefix.as_str())
        .unwrap_or_default()
        .trim();

    let Some(file) = resolve(&cfg.root, name).await else {
        tracing::debug!(file = %name, "Static file rejected or missing");
        return Response::not_found(render::not_found_page(name));
    };

    match tokio::fs::read(&file).await {
        Ok(bytes) => Response::ok(content_type_for(&file), bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Response::not_found(render::not_found_page(name))
        }
        Err(e) => {
            tracing::error!(file = %file.display(), error = %e, "Failed to read static file");
            Response::internal_error()
        }
    }
}

/// Resolves `name` under `root`, refusing anything that escapes the root or
/// is not a regular file.
pub async fn resolve(root: &Path, name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let root = tokio::fs::canonicalize(root).await.ok()?;
    let candidate = tokio::fs::canonicalize(root.join(name)).await.ok()?;
    if !candidate.starts_with(&root) {
        tracing::warn!(requested = %name, "Static path escapes the root");
        return None;
    }

    let meta = tokio::fs::metadata(&candidate).await.ok()?;
    meta.is_file().then_some(candidate)
}
