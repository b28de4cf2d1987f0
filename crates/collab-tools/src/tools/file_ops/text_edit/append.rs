//! Tool for appending lines to text files

use super::editor::{self, EditOperation};
use async_trait::async_trait;
use collab_core::tools::base::{FileSystemTool, Tool, ToolError};
use collab_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;

/// Tool for appending lines after the last line of an existing file
///
/// When the file's current last line has no terminator, one is added in
/// the file's own line-ending style before the new content.
pub struct AppendTextFileTool {
    working_directory: PathBuf,
}

impl AppendTextFileTool {
    /// Create a new append tool
    pub fn new() -> Self {
        Self {
            working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Create an append tool with specific working directory
    pub fn with_working_directory<P: Into<PathBuf>>(working_dir: P) -> Self {
        Self {
            working_directory: working_dir.into(),
        }
    }
}

impl Default for AppendTextFileTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for AppendTextFileTool {
    fn name(&self) -> &str {
        "append_text_file_contents"
    }

    fn description(&self) -> &str {
        "Append lines to the end of an existing text file.

Pass the file_hash from a previous get_text_file_contents call to fail \
with a conflict instead of appending to a file that has changed since it \
was read.

Parameters:
- file_path (required): Path to the file, relative to the working directory
- contents (required): Lines to append
- file_hash (optional): Expected hash of the current file content"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::string("file_path", "Path to the file to append to"),
                ToolParameter::string("contents", "Lines to append"),
                ToolParameter::string("file_hash", "Expected hash of the current file")
                    .optional(),
            ],
        )
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        for key in ["file_path", "contents"] {
            if call.get_string(key).is_none() {
                return Err(ToolError::InvalidArguments(format!(
                    "Missing '{}' parameter",
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
        let contents = call.get_string("contents").ok_or_else(|| {
            ToolError::InvalidArguments("Missing 'contents' parameter".to_string())
        })?;

        let path = self.resolve_path(&file_path);
        if !self.is_safe_path(&path) {
            return Err(ToolError::PermissionDenied(format!(
                "Access denied to path: {}",
                path.display()
            )));
        }

        let op = EditOperation::Append {
            contents,
            file_hash: call.get_string("file_hash"),
        };
        let result = editor::apply(&path, op).await?;

        let mut tool_result = ToolResult::success(
            &call.id,
            self.name(),
            format!(
                "Appended {} line(s) to {}",
                result.range.len(),
                file_path
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

impl FileSystemTool for AppendTextFileTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
