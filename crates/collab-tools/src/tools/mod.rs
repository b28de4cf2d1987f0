//! Tool implementations

pub mod file_ops;
pub mod vcs;

pub use file_ops::{
    AppendTextFileTool, CreateTextFileTool, DeleteTextFileTool, GetTextFileTool,
    InsertTextFileTool, PatchTextFileTool,
};
pub use vcs::GitTool;

use collab_core::tools::Tool;
use std::path::PathBuf;
use std::sync::Arc;

/// Build the default tool set rooted at `working_dir`.
pub fn get_default_tools(working_dir: impl Into<PathBuf>) -> Vec<Arc<dyn Tool>> {
    let dir = working_dir.into();
    vec![
        Arc::new(GetTextFileTool::with_working_directory(dir.clone())),
        Arc::new(CreateTextFileTool::with_working_directory(dir.clone())),
        Arc::new(AppendTextFileTool::with_working_directory(dir.clone())),
        Arc::new(InsertTextFileTool::with_working_directory(dir.clone())),
        Arc::new(DeleteTextFileTool::with_working_directory(dir.clone())),
        Arc::new(PatchTextFileTool::with_working_directory(dir.clone())),
        Arc::new(GitTool::with_working_directory(dir)),
    ]
}
