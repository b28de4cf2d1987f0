//! Tool for replacing line ranges in text files

use super::editor::{self, EditOperation};
use super::types::LineRange;
use async_trait::async_trait;
use collab_core::tools::base::{FileSystemTool, Tool, ToolError};
use collab_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;
use tracing::instrument;

/// Tool for atomically replacing an inclusive line range
///
/// The replacement is a single validated step: the range and its digest
/// are checked once against the file as it is on disk, then the whole new
/// content is committed with an atomic rename. The range_hash is
/// mandatory; a patch without a proof of what it is replacing cannot be
/// distinguished from a blind overwrite.
pub struct PatchTextFileTool {
    working_directory: PathBuf,
}

impl PatchTextFileTool {
    /// Create a new patch tool
    pub fn new() -> Self {
        Self {
            working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Create a patch tool with specific working directory
    pub fn with_working_directory<P: Into<PathBuf>>(working_dir: P) -> Self {
        Self {
            working_directory: working_dir.into(),
        }
    }
}

impl Default for PatchTextFileTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for PatchTextFileTool {
    fn name(&self) -> &str {
        "patch_text_file_contents"
    }

    fn description(&self) -> &str {
        "Replace an inclusive range of lines in a text file.

Requires the range_hash returned by get_text_file_contents for the same \
range. If those lines changed since they were read (including shifts \
caused by edits above them), the patch fails with a conflict and the file \
is left untouched; re-read the range and retry. Patches to disjoint, \
non-shifting ranges taken from the same read do not conflict.

Parameters:
- file_path (required): Path to the file, relative to the working directory
- start (required): First line to replace, 1-indexed
- end (required): Last line to replace, inclusive
- contents (required): Replacement lines (may be empty to delete the range)
- range_hash (required): Hash of the lines being replaced, as last read"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::string("file_path", "Path to the file to edit"),
                ToolParameter::integer("start", "First line to replace (1-indexed)")
                    .with_property("minimum", 1),
                ToolParameter::integer("end", "Last line to replace, inclusive")
                    .with_property("minimum", 1),
                ToolParameter::string("contents", "Replacement lines"),
                ToolParameter::string("range_hash", "Hash of the replaced span as last read"),
            ],
        )
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        for key in ["file_path", "contents", "range_hash"] {
            if call.get_string(key).is_none() {
                return Err(ToolError::InvalidArguments(format!(
                    "Missing '{}' parameter",
                    key
                )));
            }
        }
        for key in ["start", "end"] {
            if call.get_usize(key).is_none() {
                return Err(ToolError::InvalidArguments(format!(
                    "Missing or non-integer '{}' parameter",
                    key
                )));
            }
        }
        Ok(())
    }

    #[instrument(skip(self, call), fields(call_id = %call.id))]
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let file_path = call.get_string("file_path").ok_or_else(|| {
            ToolError::InvalidArguments("Missing 'file_path' parameter".to_string())
        })?;
        let contents = call.get_string("contents").ok_or_else(|| {
            ToolError::InvalidArguments("Missing 'contents' parameter".to_string())
        })?;
        let range_hash = call.get_string("range_hash").ok_or_else(|| {
            ToolError::InvalidArguments("Missing 'range_hash' parameter".to_string())
        })?;
        let start = call.get_usize("start").ok_or_else(|| {
            ToolError::InvalidArguments("Missing or non-integer 'start' parameter".to_string())
        })?;
        let end = call.get_usize("end").ok_or_else(|| {
            ToolError::InvalidArguments("Missing or non-integer 'end' parameter".to_string())
        })?;

        let path = self.resolve_path(&file_path);
        if !self.is_safe_path(&path) {
            return Err(ToolError::PermissionDenied(format!(
                "Access denied to path: {}",
                path.display()
            )));
        }

        let replaced = LineRange::new(start, end);
        let op = EditOperation::Patch {
            range: replaced,
            contents,
            range_hash,
        };
        let result = editor::apply(&path, op).await?;

        let mut tool_result = ToolResult::success(
            &call.id,
            self.name(),
            format!(
                "Patched lines {}-{} in {} ({} replacement line(s))",
                replaced.start,
                replaced.end,
                file_path,
                result.range.len()
            ),
        )
        .with_metadata("file_hash", result.file_hash)
        .with_metadata("start", result.range.start)
        .with_metadata("end", result.range.end)
        .with_metadata("total_lines", result.total_lines);
        if let Some(range_hash) = result.range_hash {
            tool_result = tool_result.with_metadata("range_hash", range_hash);
        }
        Ok(tool_result)
    }
}

impl FileSystemTool for PatchTextFileTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
