//! Tool for deleting line ranges from text files

use super::editor::{self, EditOperation};
use super::types::LineRange;
use async_trait::async_trait;
use collab_core::tools::base::{FileSystemTool, Tool, ToolError};
use collab_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;

/// Tool for removing an inclusive line range from a file
pub struct DeleteTextFileTool {
    working_directory: PathBuf,
}

impl DeleteTextFileTool {
    /// Create a new delete tool
    pub fn new() -> Self {
        Self {
            working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Create a delete tool with specific working directory
    pub fn with_working_directory<P: Into<PathBuf>>(working_dir: P) -> Self {
        Self {
            working_directory: working_dir.into(),
        }
    }
}

impl Default for DeleteTextFileTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for DeleteTextFileTool {
    fn name(&self) -> &str {
        "delete_text_file_contents"
    }

    fn description(&self) -> &str {
        "Delete an inclusive range of lines from a text file.

Pass the range_hash returned by get_text_file_contents for the same range \
to fail with a conflict if those lines changed since they were read.

Parameters:
- file_path (required): Path to the file, relative to the working directory
- start (required): First line to delete, 1-indexed
- end (required): Last line to delete, inclusive
- range_hash (optional): Expected hash of the lines being deleted"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::string("file_path", "Path to the file to edit"),
                ToolParameter::integer("start", "First line to delete (1-indexed)")
                    .with_property("minimum", 1),
                ToolParameter::integer("end", "Last line to delete, inclusive")
                    .with_property("minimum", 1),
                ToolParameter::string("range_hash", "Expected hash of the deleted span")
                    .optional(),
            ],
        )
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        if call.get_string("file_path").is_none() {
            return Err(ToolError::InvalidArguments(
                "Missing 'file_path' parameter".to_string(),
            ));
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

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let file_path = call.get_string("file_path").ok_or_else(|| {
            ToolError::InvalidArguments("Missing 'file_path' parameter".to_string())
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

        let op = EditOperation::Delete {
            range: LineRange::new(start, end),
            range_hash: call.get_string("range_hash"),
        };
        let result = editor::apply(&path, op).await?;

        Ok(ToolResult::success(
            &call.id,
            self.name(),
            format!(
                "Deleted lines {}-{} from {}",
                result.range.start, result.range.end, file_path
            ),
        )
        .with_metadata("file_hash", result.file_hash)
        .with_metadata("start", result.range.start)
        .with_metadata("end", result.range.end)
        .with_metadata("total_lines", result.total_lines))
    }
}

impl FileSystemTool for DeleteTextFileTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
