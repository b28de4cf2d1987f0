//! Git pass-through tool
//!
//! Thin wrappers over the `git` binary: status, staged and unstaged
//! diffs, diff against a target, commit, reset, log, checkout of a new
//! branch, and show. No repository state is interpreted here beyond
//! light formatting of git's own output.

use async_trait::async_trait;
use collab_core::tools::base::{FileSystemTool, Tool, ToolError};
use collab_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// Git operation types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GitOperation {
    /// Show the working tree status
    Status,
    /// Show changes not yet staged
    DiffUnstaged,
    /// Show changes staged for commit
    DiffStaged,
    /// Show differences against a branch or commit
    Diff { target: String },
    /// Stage everything and record a commit
    Commit { message: String },
    /// Unstage all staged changes
    Reset,
    /// Show the commit log
    Log { max_count: Option<usize> },
    /// Create and switch to a new branch
    Checkout { branch: String },
    /// Show the contents of a commit
    Show { revision: String },
}

/// Git tool for version control operations
pub struct GitTool {
    working_directory: PathBuf,
}

impl GitTool {
    /// Create a new git tool
    pub fn new() -> Self {
        Self {
            working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Create a git tool with specific working directory
    pub fn with_working_directory<P: Into<PathBuf>>(working_dir: P) -> Self {
        Self {
            working_directory: working_dir.into(),
        }
    }

    /// Execute a git command and return its stdout
    async fn run_git(&self, args: &[&str], dir: &Path) -> Result<String, ToolError> {
        debug!(dir = %dir.display(), "git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .await
            .map_err(|e| {
                ToolError::ExecutionFailed(format!("Failed to run git {}: {}", args.join(" "), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ToolError::ExecutionFailed(format!(
                "git {} failed: {}",
                args.join(" "),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    async fn dispatch(&self, operation: &GitOperation, dir: &Path) -> Result<String, ToolError> {
        match operation {
            GitOperation::Status => {
                let status = self.run_git(&["status"], dir).await?;
                Ok(format!("Repository status:\n{}", status))
            }
            GitOperation::DiffUnstaged => {
                let diff = self.run_git(&["diff"], dir).await?;
                Ok(format!("Unstaged changes:\n{}", diff))
            }
            GitOperation::DiffStaged => {
                let diff = self.run_git(&["diff", "--cached"], dir).await?;
                Ok(format!("Staged changes:\n{}", diff))
            }
            GitOperation::Diff { target } => {
                let diff = self.run_git(&["diff", target], dir).await?;
                Ok(format!("Diff with {}:\n{}", target, diff))
            }
            GitOperation::Commit { message } => {
                self.run_git(&["add", "-A"], dir).await?;
                self.run_git(&["commit", "-m", message], dir).await?;
                let hash = self.run_git(&["rev-parse", "HEAD"], dir).await?;
                Ok(format!(
                    "Changes committed successfully with hash {}",
                    hash.trim()
                ))
            }
            GitOperation::Reset => {
                self.run_git(&["reset"], dir).await?;
                Ok("All staged changes reset".to_string())
            }
            GitOperation::Log { max_count } => {
                let count = max_count.unwrap_or(10).to_string();
                let log = self
                    .run_git(
                        &[
                            "log",
                            "-n",
                            count.as_str(),
                            "--pretty=format:Commit: %H%nAuthor: %an <%ae>%nDate: %ad%nMessage: %s%n",
                        ],
                        dir,
                    )
                    .await?;
                Ok(format!("Commit history:\n{}", log))
            }
            GitOperation::Checkout { branch } => {
                self.run_git(&["checkout", "-b", branch], dir).await?;
                Ok(format!("Created and switched to branch '{}'", branch))
            }
            GitOperation::Show { revision } => self.run_git(&["show", revision], dir).await,
        }
    }
}

impl Default for GitTool {
    fn default() -> Self {
        Self::new()
    }
}

/// Git tool parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GitToolParams {
    operation: GitOperation,
    working_dir: Option<String>,
}

fn parse_params(call: &ToolCall) -> Result<GitToolParams, ToolError> {
    let value = serde_json::to_value(&call.arguments)?;
    serde_json::from_value(value).map_err(|e| {
        ToolError::InvalidArguments(format!("Failed to parse git tool parameters: {}", e))
    })
}

#[async_trait]
impl Tool for GitTool {
    fn name(&self) -> &str {
        "git"
    }

    fn description(&self) -> &str {
        "Git version control operations: status, staged/unstaged diffs, \
diff against a target, commit (stages all changes first), reset, log, \
checkout of a new branch, and show.

Parameters:
- operation (required): One of {\"status\"}, {\"diff_unstaged\"}, \
{\"diff_staged\"}, {\"diff\": {\"target\": ...}}, {\"commit\": \
{\"message\": ...}}, {\"reset\"}, {\"log\": {\"max_count\": ...}}, \
{\"checkout\": {\"branch\": ...}}, {\"show\": {\"revision\": ...}}
- working_dir (optional): Repository path, relative to the working directory"
    }

    fn schema(&self) -> ToolSchema {
        let operation_schema = serde_json::json!({
            "oneOf": [
                { "type": "string", "enum": ["status", "diff_unstaged", "diff_staged", "reset"] },
                {
                    "type": "object",
                    "properties": {
                        "diff": {
                            "type": "object",
                            "properties": { "target": { "type": "string" } },
                            "required": ["target"]
                        }
                    },
                    "required": ["diff"],
                    "additionalProperties": false
                },
                {
                    "type": "object",
                    "properties": {
                        "commit": {
                            "type": "object",
                            "properties": { "message": { "type": "string" } },
                            "required": ["message"]
                        }
                    },
                    "required": ["commit"],
                    "additionalProperties": false
                },
                {
                    "type": "object",
                    "properties": {
                        "log": {
                            "type": "object",
                            "properties": {
                                "max_count": { "type": "integer", "minimum": 1, "default": 10 }
                            }
                        }
                    },
                    "required": ["log"],
                    "additionalProperties": false
                },
                {
                    "type": "object",
                    "properties": {
                        "checkout": {
                            "type": "object",
                            "properties": { "branch": { "type": "string" } },
                            "required": ["branch"]
                        }
                    },
                    "required": ["checkout"],
                    "additionalProperties": false
                },
                {
                    "type": "object",
                    "properties": {
                        "show": {
                            "type": "object",
                            "properties": { "revision": { "type": "string" } },
                            "required": ["revision"]
                        }
                    },
                    "required": ["show"],
                    "additionalProperties": false
                }
            ]
        });

        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::object("operation", "Git operation to perform")
                    .with_property("oneOf", operation_schema["oneOf"].clone()),
                ToolParameter::string("working_dir", "Repository path").optional(),
            ],
        )
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        parse_params(call)?;
        Ok(())
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let params = parse_params(call)?;

        let dir = match &params.working_dir {
            Some(d) => self.resolve_path(d),
            None => self.working_directory.clone(),
        };
        if !dir.exists() {
            return Err(ToolError::NotFound(format!(
                "Working directory does not exist: {}",
                dir.display()
            )));
        }
        if !self.is_safe_path(&dir) {
            return Err(ToolError::PermissionDenied(format!(
                "Access denied to path: {}",
                dir.display()
            )));
        }

        let output = self.dispatch(&params.operation, &dir).await?;
        Ok(ToolResult::success(&call.id, self.name(), output))
    }

    fn supports_parallel_execution(&self) -> bool {
        false
    }
}

impl FileSystemTool for GitTool {
    fn working_directory(&self) -> &Path {
        &self.working_directory
    }
}
