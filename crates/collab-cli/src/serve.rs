//! Line-delimited JSON dispatch loop
//!
//! One JSON object per stdin line ({"id", "name", "arguments"}), one
//! `ToolResult` per stdout line. Logging goes to stderr so stdout stays
//! protocol-clean.

use anyhow::Result;
use collab_core::tools::{ToolCall, ToolExecutor, ToolRegistry, ToolResult};
use serde::Deserialize;
use std::collections::HashMap;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

/// One request line from the client
#[derive(Debug, Deserialize)]
struct ToolRequest {
    id: String,
    name: String,
    #[serde(default)]
    arguments: HashMap<String, serde_json::Value>,
}

pub async fn run(registry: &ToolRegistry) -> Result<()> {
    let executor = ToolExecutor::from_registry(registry);
    info!(tools = registry.len(), "serving tool calls on stdin/stdout");

    let stdin = BufReader::new(io::stdin());
    let mut stdout = io::stdout();
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let result = match serde_json::from_str::<ToolRequest>(&line) {
            Ok(request) => {
                let call = ToolCall::new(request.id, request.name, request.arguments);
                executor.execute_tool(&call).await
            }
            Err(e) => {
                warn!(error = %e, "malformed request line");
                ToolResult::error("", "unknown", format!("Malformed request: {}", e))
            }
        };

        let mut payload = serde_json::to_vec(&result)?;
        payload.push(b'\n');
        stdout.write_all(&payload).await?;
        stdout.flush().await?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}
