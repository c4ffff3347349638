//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::info;

/// Ensure the directory holding a sqlite database file exists.
/// `None` (in-memory store) and bare file names are no-ops.
pub async fn ensure_db_dir(db_file: Option<&str>) -> anyhow::Result<()> {
    let Some(file) = db_file else { return Ok(()) };
    let Some(parent) = Path::new(file).parent() else { return Ok(()) };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    if tokio::fs::metadata(parent).await.is_err() {
        info!(dir = %parent.display(), "creating database directory");
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    Ok(())
}
