//! Atomic write-back for edited files

use collab_core::tools::ToolError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Commit `content` to `path` atomically.
///
/// The content is written to a temporary file in the target's own
/// directory (the rename is only atomic within one filesystem), flushed
/// and synced, then renamed over the target. Observers see either the old
/// or the new content, never a partial write. On every failure path the
/// temporary file is dropped and removed and the original file is left
/// untouched; only a fully successful rename publishes the new content.
pub async fn commit(path: &Path, content: &str) -> Result<(), ToolError> {
    let path = path.to_path_buf();
    let content = content.to_string();

    tokio::task::spawn_blocking(move || commit_sync(&path, &content))
        .await
        .map_err(|e| ToolError::ExecutionFailed(format!("atomic write task panicked: {}", e)))?
}

fn commit_sync(path: &Path, content: &str) -> Result<(), ToolError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;

    debug!(target_path = %path.display(), "persisting atomic write");
    tmp.persist(path).map_err(|e| ToolError::Io(e.error))?;
    Ok(())
}
