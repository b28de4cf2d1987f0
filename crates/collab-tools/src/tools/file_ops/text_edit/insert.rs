//! Tool for inserting lines into text files

use super::editor::{self, EditOperation};
use async_trait::async_trait;
use collab_core::tools::base::{FileSystemTool, Tool, ToolError};
use collab_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;

/// Tool for inserting lines before a given position
///
/// Position `total_lines + 1` is equivalent to appending.
pub struct InsertTextFileTool {
    working_directory: PathBuf,
}

impl InsertTextFileTool {
    /// Create a new insert tool
    pub fn new() -> Self {
        Self {
            working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Create an insert tool with specific working directory
    pub fn with_working_directory<P: Into<PathBuf>>(working_dir: P) -> Self {
        Self {
            working_directory: working_dir.into(),
        }
    }
}

impl Default for InsertTextFileTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for InsertTextFileTool {
    fn name(&self) -> &str {
        "insert_text_file_contents"
    }

    fn description(&self) -> &str {
        "Insert lines into a text file before the given line number.

line may range from 1 (insert at the top) to one past the last line \
(equivalent to appending). Pass the file_hash from a previous read to \
fail with a conflict instead of inserting into a file that has changed.

Parameters:
- file_path (required): Path to the file, relative to the working directory
- line (required): 1-indexed position to insert before
- contents (required): Lines to insert
- file_hash (optional): Expected hash of the current file content"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::string("file_path", "Path to the file to edit"),
                ToolParameter::integer("line", "1-indexed position to insert before")
                    .with_property("minimum", 1),
                ToolParameter::string("contents", "Lines to insert"),
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
        if call.get_usize("line").is_none() {
            return Err(ToolError::InvalidArguments(
                "Missing or non-integer 'line' parameter".to_string(),
            ));
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
        let line = call.get_usize("line").ok_or_else(|| {
            ToolError::InvalidArguments("Missing or non-integer 'line' parameter".to_string())
        })?;

        let path = self.resolve_path(&file_path);
        if !self.is_safe_path(&path) {
            return Err(ToolError::PermissionDenied(format!(
                "Access denied to path: {}",
                path.display()
            )));
        }

        let op = EditOperation::Insert {
            line,
            contents,
            file_hash: call.get_string("file_hash"),
        };
        let result = editor::apply(&path, op).await?;

        let mut tool_result = ToolResult::success(
            &call.id,
            self.name(),
            format!(
                "Inserted {} line(s) at line {} in {}",
                result.range.len(),
                result.range.start,
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

impl FileSystemTool for InsertTextFileTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
