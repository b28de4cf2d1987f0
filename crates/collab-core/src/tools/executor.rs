//! Tool execution engine

use crate::tools::base::Tool;
use crate::tools::registry::ToolRegistry;
use crate::tools::types::{ToolCall, ToolResult};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Tool executor that manages and executes tools
pub struct ToolExecutor {
    tools: HashMap<String, Arc<dyn Tool>>,
    max_execution_time: Duration,
}

impl ToolExecutor {
    /// Create a new tool executor
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            max_execution_time: Duration::from_secs(300),
        }
    }

    /// Create an executor holding every tool in `registry`
    pub fn from_registry(registry: &ToolRegistry) -> Self {
        let mut executor = Self::new();
        executor.register_tools(registry.all_tools());
        executor
    }

    /// Override the fallback execution timeout
    pub fn with_max_execution_time(mut self, max_execution_time: Duration) -> Self {
        self.max_execution_time = max_execution_time;
        self
    }

    /// Register a tool
    pub fn register_tool(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Register multiple tools
    pub fn register_tools(&mut self, tools: Vec<Arc<dyn Tool>>) {
        for tool in tools {
            self.register_tool(tool);
        }
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Get all registered tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Check if a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Execute a single tool call
    pub async fn execute_tool(&self, call: &ToolCall) -> ToolResult {
        let tool = match self.tools.get(&call.name) {
            Some(tool) => tool,
            None => {
                return ToolResult::error(
                    &call.id,
                    &call.name,
                    format!("Tool '{}' not found", call.name),
                );
            }
        };

        debug!(tool = %call.name, call_id = %call.id, "executing tool call");

        let execution_timeout = tool
            .max_execution_duration()
            .unwrap_or(self.max_execution_time);

        match timeout(execution_timeout, tool.execute_with_timing(call)).await {
            Ok(result) => result,
            Err(_) => ToolResult::error(
                &call.id,
                &call.name,
                format!("Tool execution timed out after {:?}", execution_timeout),
            ),
        }
    }

    /// Execute multiple tool calls in order
    ///
    /// Calls run sequentially: file mutations are validated against on-disk
    /// state at execution time, so reordering or overlapping them here would
    /// only manufacture conflicts.
    pub async fn execute_tools(&self, calls: &[ToolCall]) -> Vec<ToolResult> {
        let mut results = Vec::with_capacity(calls.len());
        for call in calls {
            results.push(self.execute_tool(call).await);
        }
        results
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::base::ToolError;
    use crate::tools::types::ToolSchema;
    use async_trait::async_trait;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "echoes its message argument"
        }
        fn schema(&self) -> ToolSchema {
            ToolSchema::new(self.name(), self.description(), vec![])
        }
        async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
            let message = call.get_string("message").unwrap_or_default();
            Ok(ToolResult::success(&call.id, self.name(), message))
        }
    }

    #[tokio::test]
    async fn test_execute_registered_tool() {
        let mut executor = ToolExecutor::new();
        executor.register_tool(Arc::new(EchoTool));

        let mut args = HashMap::new();
        args.insert("message".to_string(), serde_json::json!("hello"));
        let call = ToolCall::new("call-1", "echo", args);

        let result = executor.execute_tool(&call).await;
        assert!(result.success);
        assert_eq!(result.output.as_deref(), Some("hello"));
        assert!(result.execution_time_ms.is_some());
    }

    #[tokio::test]
    async fn test_unknown_tool_reports_error() {
        let executor = ToolExecutor::new();
        let call = ToolCall::new("call-2", "nope", HashMap::new());

        let result = executor.execute_tool(&call).await;
        assert!(!result.success);
        assert!(result.error.unwrap().contains("not found"));
    }
}
