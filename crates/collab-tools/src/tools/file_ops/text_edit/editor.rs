//! Range-editing engine
//!
//! Every edit kind goes through [`apply`]: load a fresh snapshot, check
//! bounds, verify the caller's digest expectation against the bytes on
//! disk right now, build the complete new line sequence, and commit it
//! atomically. All checks happen before any mutation; a failed operation
//! leaves the file exactly as it was.

use super::types::{FileSnapshot, LineRange};
use super::{hash, indexer, writer};
use collab_core::tools::ToolError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// A validated range-editing operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOperation {
    /// Read lines `[start, end]`; `start` defaults to 1 and `end` to the
    /// last line
    Get {
        start: Option<usize>,
        end: Option<usize>,
    },
    /// Write `contents` as a new file
    Create {
        contents: String,
        overwrite: bool,
        file_hash: Option<String>,
    },
    /// Add `contents` after the last existing line
    Append {
        contents: String,
        file_hash: Option<String>,
    },
    /// Insert `contents` before line `line`; `total_lines + 1` appends
    Insert {
        line: usize,
        contents: String,
        file_hash: Option<String>,
    },
    /// Remove the inclusive `range`
    Delete {
        range: LineRange,
        range_hash: Option<String>,
    },
    /// Replace the inclusive `range` with `contents` in one validated step
    Patch {
        range: LineRange,
        contents: String,
        range_hash: String,
    },
}

/// Outcome of an operation
#[derive(Debug, Clone)]
pub struct EditResult {
    /// Digest of the whole file after the operation
    pub file_hash: String,
    /// Affected range in post-edit line numbers (for Delete, the removed
    /// pre-edit range)
    pub range: LineRange,
    /// Digest of the affected span after the operation; `None` when the
    /// operation leaves no span (Delete, empty Patch payload)
    pub range_hash: Option<String>,
    /// Line count after the operation
    pub total_lines: usize,
    /// Returned lines (Get only)
    pub content: Option<String>,
}

/// Apply `op` to the file at `path`.
pub async fn apply(path: &Path, op: EditOperation) -> Result<EditResult, ToolError> {
    match op {
        EditOperation::Get { start, end } => get(path, start, end).await,
        EditOperation::Create {
            contents,
            overwrite,
            file_hash,
        } => create(path, contents, overwrite, file_hash).await,
        EditOperation::Append {
            contents,
            file_hash,
        } => append(path, contents, file_hash).await,
        EditOperation::Insert {
            line,
            contents,
            file_hash,
        } => insert(path, line, contents, file_hash).await,
        EditOperation::Delete { range, range_hash } => delete(path, range, range_hash).await,
        EditOperation::Patch {
            range,
            contents,
            range_hash,
        } => patch(path, range, contents, range_hash).await,
    }
}

async fn get(
    path: &Path,
    start: Option<usize>,
    end: Option<usize>,
) -> Result<EditResult, ToolError> {
    let snapshot = FileSnapshot::load(path).await?;
    let total = snapshot.total_lines();

    // Defaulted bounds on an empty file resolve to the empty span [1, 0];
    // explicit bounds are held to the usual invariant.
    let resolved = LineRange::new(start.unwrap_or(1), end.unwrap_or(total));
    if !(total == 0 && start.is_none() && end.is_none()) {
        resolved.validate(total)?;
    }

    let content = snapshot.span_content(resolved);
    let range_hash = hash::digest(content.as_bytes());

    Ok(EditResult {
        file_hash: snapshot.file_hash,
        range: resolved,
        range_hash: Some(range_hash),
        total_lines: total,
        content: Some(content),
    })
}

async fn create(
    path: &Path,
    contents: String,
    overwrite: bool,
    file_hash: Option<String>,
) -> Result<EditResult, ToolError> {
    if path.exists() {
        if !overwrite {
            return Err(ToolError::AlreadyExists(format!(
                "File already exists: {} (pass overwrite=true to replace it)",
                path.display()
            )));
        }
        // The expectation only makes sense against an existing file.
        if let Some(expected) = &file_hash {
            let snapshot = FileSnapshot::load(path).await?;
            hash::verify(expected, &snapshot.file_hash, "file")?;
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    writer::commit(path, &contents).await?;
    debug!(path = %path.display(), bytes = contents.len(), "created file");

    let snapshot = FileSnapshot::from_content(path, &contents);
    let total = snapshot.total_lines();
    Ok(EditResult {
        file_hash: snapshot.file_hash.clone(),
        range: LineRange::new(1, total),
        range_hash: Some(snapshot.file_hash),
        total_lines: total,
        content: None,
    })
}

async fn append(
    path: &Path,
    contents: String,
    file_hash: Option<String>,
) -> Result<EditResult, ToolError> {
    let snapshot = FileSnapshot::load(path).await?;
    if let Some(expected) = &file_hash {
        hash::verify(expected, &snapshot.file_hash, "file")?;
    }
    let at = snapshot.total_lines() + 1;
    commit_splice(&snapshot, at, 0, payload_lines(&contents)?).await
}

async fn insert(
    path: &Path,
    line: usize,
    contents: String,
    file_hash: Option<String>,
) -> Result<EditResult, ToolError> {
    let snapshot = FileSnapshot::load(path).await?;
    if let Some(expected) = &file_hash {
        hash::verify(expected, &snapshot.file_hash, "file")?;
    }

    let total = snapshot.total_lines();
    if line < 1 || line > total + 1 {
        return Err(ToolError::OutOfRange(format!(
            "Insert position {} outside [1, {}] for a {}-line file",
            line,
            total + 1,
            total
        )));
    }

    commit_splice(&snapshot, line, 0, payload_lines(&contents)?).await
}

async fn delete(
    path: &Path,
    range: LineRange,
    range_hash: Option<String>,
) -> Result<EditResult, ToolError> {
    let snapshot = FileSnapshot::load(path).await?;
    range.validate(snapshot.total_lines())?;
    if let Some(expected) = &range_hash {
        hash::verify(expected, &snapshot.range_hash(range), &range.to_string())?;
    }

    let result = commit_splice(&snapshot, range.start, range.len(), Vec::new()).await?;
    // Report what was removed, not the empty post-edit span.
    Ok(EditResult { range, ..result })
}

async fn patch(
    path: &Path,
    range: LineRange,
    contents: String,
    range_hash: String,
) -> Result<EditResult, ToolError> {
    let snapshot = FileSnapshot::load(path).await?;
    range.validate(snapshot.total_lines())?;
    hash::verify(&range_hash, &snapshot.range_hash(range), &range.to_string())?;

    let payload = indexer::split_lines(&contents);
    commit_splice(&snapshot, range.start, range.len(), payload).await
}

/// Split a payload into lines, rejecting empty payloads.
fn payload_lines(contents: &str) -> Result<Vec<String>, ToolError> {
    let lines = indexer::split_lines(contents);
    if lines.is_empty() {
        return Err(ToolError::InvalidArguments(
            "'contents' must not be empty".to_string(),
        ));
    }
    Ok(lines)
}

/// Replace `replace` lines at 1-indexed `start` with `payload`, commit the
/// result atomically, and describe the new state.
///
/// Terminator policy: when lines survive after the spliced region, the
/// payload's last line is given the file's line ending if it lacks one;
/// when the splice reaches end-of-file, the payload's own trailing-newline
/// presence is preserved. An append after an unterminated last line first
/// terminates that line.
async fn commit_splice(
    snapshot: &FileSnapshot,
    start: usize,
    replace: usize,
    mut payload: Vec<String>,
) -> Result<EditResult, ToolError> {
    let total = snapshot.total_lines();
    let tail_start = start - 1 + replace;

    if tail_start < total {
        if let Some(last) = payload.last_mut() {
            indexer::ensure_terminator(last, snapshot.line_ending);
        }
    }

    let mut lines: Vec<String> = Vec::with_capacity(total - replace + payload.len());
    lines.extend_from_slice(&snapshot.lines[..start - 1]);
    if start == total + 1 && !payload.is_empty() {
        if let Some(last) = lines.last_mut() {
            indexer::ensure_terminator(last, snapshot.line_ending);
        }
    }
    let payload_len = payload.len();
    lines.extend(payload);
    lines.extend_from_slice(&snapshot.lines[tail_start..]);

    let new_content = lines.concat();
    writer::commit(&snapshot.path, &new_content).await?;
    debug!(
        path = %snapshot.path.display(),
        start,
        replaced = replace,
        inserted = payload_len,
        "committed range edit"
    );

    let new_snapshot = FileSnapshot::from_content(&snapshot.path, &new_content);
    let (range, range_hash) = if payload_len > 0 {
        let range = LineRange::new(start, start + payload_len - 1);
        (range, Some(new_snapshot.range_hash(range)))
    } else {
        (LineRange::new(start, start - 1), None)
    };

    Ok(EditResult {
        file_hash: new_snapshot.file_hash,
        range,
        range_hash,
        total_lines: lines.len(),
        content: None,
    })
}
