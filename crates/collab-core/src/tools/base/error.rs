//! Error types for tool operations

use crate::error::CollabError;

/// Error type for tool operations
///
/// `Conflict` and `OutOfRange` are ordinary user-facing errors: the caller
/// re-reads and retries. `Io` during a commit is fatal for that call but
/// never leaves a target file partially written.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Invalid arguments provided to the tool
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Content changed since the caller last read it (hash mismatch)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Line range outside the current bounds of the file
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Missing file for an operation that requires one
    #[error("Not found: {0}")]
    NotFound(String),

    /// Create on an existing path without the overwrite flag
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Content is not decodable as text
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Tool execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tool timeout
    #[error("Tool execution timeout")]
    Timeout,
}

impl crate::error::UnifiedError for ToolError {
    fn error_code(&self) -> &str {
        match self {
            ToolError::InvalidArguments(_) => "TOOL_INVALID_ARGS",
            ToolError::Conflict(_) => "TOOL_CONFLICT",
            ToolError::OutOfRange(_) => "TOOL_OUT_OF_RANGE",
            ToolError::NotFound(_) => "TOOL_NOT_FOUND",
            ToolError::AlreadyExists(_) => "TOOL_ALREADY_EXISTS",
            ToolError::Encoding(_) => "TOOL_ENCODING_ERROR",
            ToolError::ExecutionFailed(_) => "TOOL_EXEC_FAILED",
            ToolError::PermissionDenied(_) => "TOOL_PERMISSION_DENIED",
            ToolError::Io(_) => "TOOL_IO_ERROR",
            ToolError::Json(_) => "TOOL_JSON_ERROR",
            ToolError::Timeout => "TOOL_TIMEOUT",
        }
    }

    fn message(&self) -> &str {
        match self {
            ToolError::InvalidArguments(msg) => msg,
            ToolError::Conflict(msg) => msg,
            ToolError::OutOfRange(msg) => msg,
            ToolError::NotFound(msg) => msg,
            ToolError::AlreadyExists(msg) => msg,
            ToolError::Encoding(msg) => msg,
            ToolError::ExecutionFailed(msg) => msg,
            ToolError::PermissionDenied(msg) => msg,
            ToolError::Io(_) => "IO error occurred",
            ToolError::Json(_) => "JSON error occurred",
            ToolError::Timeout => "Tool execution timeout",
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(
            self,
            ToolError::Conflict(_) | ToolError::Io(_) | ToolError::Timeout
        )
    }
}

impl From<ToolError> for CollabError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(msg) => CollabError::tool("unknown", msg),
            ToolError::Io(err) => CollabError::io(err.to_string()),
            ToolError::Json(err) => CollabError::Json(err.to_string()),
            other => CollabError::tool("unknown", other.to_string()),
        }
    }
}
