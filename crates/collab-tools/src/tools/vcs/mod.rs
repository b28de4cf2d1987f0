//! Version control tools

pub mod git;

pub use git::{GitOperation, GitTool};
