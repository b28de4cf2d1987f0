//! Tool system for Collab

pub mod base;
pub mod executor;
pub mod registry;
pub mod types;

pub use base::{FileSystemTool, Tool, ToolError};
pub use executor::ToolExecutor;
pub use registry::{ToolRegistry, ToolRegistryBuilder};
pub use types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
