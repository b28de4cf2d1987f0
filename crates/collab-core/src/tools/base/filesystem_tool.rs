//! File system helper trait for tools

use super::tool_trait::Tool;
use std::path::{Path, PathBuf};

/// Helper trait for tools that operate on the file system.
///
/// Provides path resolution against a working directory and a containment
/// check that rejects paths escaping it (via `..` components or symlinks).
pub trait FileSystemTool: Tool {
    /// Get the working directory for file operations.
    fn working_directory(&self) -> &Path;

    /// Resolve a possibly-relative path against the working directory.
    fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_directory().join(path)
        }
    }

    /// Check whether `path` stays within the working directory.
    ///
    /// The target may not exist yet (Create); in that case the nearest
    /// existing ancestor is canonicalized and the remaining components are
    /// re-applied before the containment check.
    fn is_safe_path(&self, path: &Path) -> bool {
        let working_dir = match self.working_directory().canonicalize() {
            Ok(p) => p,
            Err(_) => return false,
        };

        let canonical = match canonicalize_allowing_missing(path) {
            Some(p) => p,
            None => return false,
        };

        canonical.starts_with(&working_dir)
    }
}

/// Canonicalize a path whose trailing components may not exist yet.
fn canonicalize_allowing_missing(path: &Path) -> Option<PathBuf> {
    if path.exists() {
        return path.canonicalize().ok();
    }

    let mut current = path.to_path_buf();
    let mut pending = Vec::new();

    loop {
        if current.exists() {
            let mut resolved = current.canonicalize().ok()?;
            for component in pending.into_iter().rev() {
                resolved.push(component);
            }
            return Some(resolved);
        }

        pending.push(current.file_name()?.to_os_string());
        current = current.parent()?.to_path_buf();
        if current.as_os_str().is_empty() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::base::ToolError;
    use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct ProbeTool {
        working_dir: PathBuf,
    }

    #[async_trait]
    impl Tool for ProbeTool {
        fn name(&self) -> &str {
            "probe"
        }
        fn description(&self) -> &str {
            "test probe"
        }
        fn schema(&self) -> ToolSchema {
            ToolSchema::new(self.name(), self.description(), vec![])
        }
        async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::success(&call.id, self.name(), ""))
        }
    }

    impl FileSystemTool for ProbeTool {
        fn working_directory(&self) -> &Path {
            &self.working_dir
        }
    }

    #[test]
    fn test_resolve_relative_path() {
        let tool = ProbeTool {
            working_dir: PathBuf::from("/srv/project"),
        };
        assert_eq!(
            tool.resolve_path("notes.txt"),
            PathBuf::from("/srv/project/notes.txt")
        );
        assert_eq!(tool.resolve_path("/etc/hosts"), PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn test_safe_path_inside_working_dir() {
        let temp_dir = TempDir::new().unwrap();
        let tool = ProbeTool {
            working_dir: temp_dir.path().to_path_buf(),
        };

        let inside = temp_dir.path().join("sub/dir/file.txt");
        assert!(tool.is_safe_path(&inside));
    }

    #[test]
    fn test_escape_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let tool = ProbeTool {
            working_dir: temp_dir.path().to_path_buf(),
        };

        let outside = temp_dir.path().join("../outside.txt");
        assert!(!tool.is_safe_path(&outside));
    }
}
