//! Core Tool trait definition

use super::error::ToolError;
use crate::error::UnifiedError;
use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Base trait for all tools
///
/// Tools are capabilities exposed to an automated client. Each tool has a
/// schema for validation and an execution path that returns a structured
/// result.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool's unique name (e.g., "patch_text_file_contents")
    fn name(&self) -> &str;

    /// Get the tool's description for the calling client
    fn description(&self) -> &str;

    /// Get the tool's JSON schema for input parameters
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if arguments are invalid or execution fails.
    /// Expected conditions such as `Conflict` and `OutOfRange` come back
    /// through this path too; the dispatch layer reports them as ordinary
    /// retryable errors.
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError>;

    /// Validate the tool call arguments
    ///
    /// Called before `execute()` to verify arguments are valid.
    /// Default implementation accepts all arguments.
    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let _ = call;
        Ok(())
    }

    /// Get the maximum execution time as Duration (default: 5 minutes)
    fn max_execution_duration(&self) -> Option<Duration> {
        Some(Duration::from_secs(300))
    }

    /// Whether this tool only reads data without side effects
    fn is_read_only(&self) -> bool {
        false
    }

    /// Whether this tool can be called in parallel with other tools
    fn supports_parallel_execution(&self) -> bool {
        self.is_read_only()
    }

    /// Execute the tool with timing and error handling
    ///
    /// Wraps `execute()` with argument validation, timing measurement, and
    /// conversion of errors into failed `ToolResult`s carrying the error
    /// code and retryability in metadata.
    async fn execute_with_timing(&self, call: &ToolCall) -> ToolResult {
        let start_time = Instant::now();

        if let Err(err) = self.validate(call) {
            return error_result(self.name(), call, &err)
                .with_execution_time(start_time.elapsed().as_millis() as u64);
        }

        match self.execute(call).await {
            Ok(mut result) => {
                result.execution_time_ms = Some(start_time.elapsed().as_millis() as u64);
                result
            }
            Err(err) => error_result(self.name(), call, &err)
                .with_execution_time(start_time.elapsed().as_millis() as u64),
        }
    }
}

fn error_result(tool_name: &str, call: &ToolCall, err: &ToolError) -> ToolResult {
    ToolResult::error(&call.id, tool_name, err.to_string())
        .with_metadata("error_code", err.error_code())
        .with_metadata("retryable", err.is_retryable())
}
