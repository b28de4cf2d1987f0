//! Tool for reading line ranges from text files

use super::editor::{self, EditOperation};
use async_trait::async_trait;
use collab_core::tools::base::{FileSystemTool, Tool, ToolError};
use collab_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;

/// Tool for reading a contiguous line range from a text file
///
/// Returns the requested lines along with the digests a later edit can
/// present as its expectation: the whole-file hash and the hash of the
/// returned span.
pub struct GetTextFileTool {
    working_directory: PathBuf,
}

impl GetTextFileTool {
    /// Create a new get tool
    pub fn new() -> Self {
        Self {
            working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Create a get tool with specific working directory
    pub fn with_working_directory<P: Into<PathBuf>>(working_dir: P) -> Self {
        Self {
            working_directory: working_dir.into(),
        }
    }
}

impl Default for GetTextFileTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for GetTextFileTool {
    fn name(&self) -> &str {
        "get_text_file_contents"
    }

    fn description(&self) -> &str {
        "Read a line range from a text file.

Returns the requested lines together with the file hash and the range \
hash. Pass the range hash back to patch_text_file_contents (or the file \
hash to the other editing tools) so a concurrent change is detected \
instead of overwritten.

Parameters:
- file_path (required): Path to the file, relative to the working directory
- start (optional): First line to read, 1-indexed (default: 1)
- end (optional): Last line to read, inclusive (default: last line)"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::string("file_path", "Path to the file to read"),
                ToolParameter::integer("start", "First line to read (1-indexed)")
                    .optional()
                    .with_property("minimum", 1),
                ToolParameter::integer("end", "Last line to read, inclusive")
                    .optional()
                    .with_property("minimum", 1),
            ],
        )
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        if call.get_string("file_path").is_none() {
            return Err(ToolError::InvalidArguments(
                "Missing 'file_path' parameter".to_string(),
            ));
        }
        Ok(())
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let file_path = call.get_string("file_path").ok_or_else(|| {
            ToolError::InvalidArguments("Missing 'file_path' parameter".to_string())
        })?;

        let path = self.resolve_path(&file_path);
        if !self.is_safe_path(&path) {
            return Err(ToolError::PermissionDenied(format!(
                "Access denied to path: {}",
                path.display()
            )));
        }

        let op = EditOperation::Get {
            start: call.get_usize("start"),
            end: call.get_usize("end"),
        };
        let result = editor::apply(&path, op).await?;

        let mut tool_result = ToolResult::success(
            &call.id,
            self.name(),
            result.content.unwrap_or_default(),
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

    fn is_read_only(&self) -> bool {
        true
    }
}

impl FileSystemTool for GetTextFileTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
