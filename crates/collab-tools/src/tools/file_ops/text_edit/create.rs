//! Tool for creating text files

use super::editor::{self, EditOperation};
use async_trait::async_trait;
use collab_core::tools::base::{FileSystemTool, Tool, ToolError};
use collab_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;
use tracing::instrument;

/// Tool for creating a new text file
///
/// Refuses to touch an existing file unless `overwrite` is set; with
/// `overwrite`, an optional `file_hash` expectation guards against
/// replacing content the caller has not seen.
pub struct CreateTextFileTool {
    working_directory: PathBuf,
}

impl CreateTextFileTool {
    /// Create a new create tool
    pub fn new() -> Self {
        Self {
            working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Create a create tool with specific working directory
    pub fn with_working_directory<P: Into<PathBuf>>(working_dir: P) -> Self {
        Self {
            working_directory: working_dir.into(),
        }
    }
}

impl Default for CreateTextFileTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CreateTextFileTool {
    fn name(&self) -> &str {
        "create_text_file"
    }

    fn description(&self) -> &str {
        "Create a new text file with the given contents.

Fails if the file already exists, unless overwrite=true is passed. Parent \
directories are created as needed. When overwriting, pass the file_hash \
from a previous read to fail instead of replacing content that has \
changed since.

Parameters:
- file_path (required): Path for the new file, relative to the working directory
- contents (required): Full contents of the new file
- overwrite (optional): Replace an existing file (default: false)
- file_hash (optional): Expected hash of the existing file when overwriting"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::string("file_path", "Path for the new file"),
                ToolParameter::string("contents", "Full contents of the new file"),
                ToolParameter::boolean("overwrite", "Replace an existing file")
                    .optional()
                    .with_default(false),
                ToolParameter::string("file_hash", "Expected hash of the existing file")
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

    #[instrument(skip(self, call), fields(call_id = %call.id))]
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

        let existed = path.exists();
        let op = EditOperation::Create {
            contents,
            overwrite: call.get_bool("overwrite").unwrap_or(false),
            file_hash: call.get_string("file_hash"),
        };
        let result = editor::apply(&path, op).await?;

        let action = if existed { "Replaced" } else { "Created" };
        Ok(ToolResult::success(
            &call.id,
            self.name(),
            format!(
                "{} file {} ({} lines)",
                action, file_path, result.total_lines
            ),
        )
        .with_metadata("file_hash", result.file_hash)
        .with_metadata("start", result.range.start)
        .with_metadata("end", result.range.end)
        .with_metadata("total_lines", result.total_lines))
    }
}

impl FileSystemTool for CreateTextFileTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
