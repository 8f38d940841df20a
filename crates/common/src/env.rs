//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::{debug, warn};

/// Ensure the parent directory of every given file path exists.
pub async fn ensure_parent_dirs<P: AsRef<Path>>(files: &[P]) -> anyhow::Result<()> {
    for file in files {
        let Some(parent) = file.as_ref().parent() else { continue };
        if parent.as_os_str().is_empty() {
            continue;
        }
        if tokio::fs::metadata(parent).await.is_err() {
            warn!(dir = %parent.display(), "data directory missing; creating it");
        }
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        debug!(dir = %parent.display(), "data directory ready");
    }
    Ok(())
}

/// Extract the filesystem path from a `sqlite:` URL, if it points at a file.
pub fn sqlite_file_path(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(path)
    }
}
