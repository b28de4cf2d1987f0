//! Shared helpers for text_edit tests

use collab_core::tools::types::ToolCall;
use std::collections::HashMap;
use std::path::Path;

/// Build a ToolCall from a JSON object literal
pub fn tool_call(id: &str, name: &str, args: serde_json::Value) -> ToolCall {
    let arguments = match args {
        serde_json::Value::Object(map) => map.into_iter().collect(),
        _ => HashMap::new(),
    };
    ToolCall::new(id.to_string(), name.to_string(), arguments)
}

pub async fn write_file(path: &Path, content: &str) {
    tokio::fs::write(path, content).await.unwrap();
}

pub async fn read_file(path: &Path) -> String {
    tokio::fs::read_to_string(path).await.unwrap()
}
