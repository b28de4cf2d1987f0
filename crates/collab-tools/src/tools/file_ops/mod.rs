//! File editing tools

pub mod text_edit;

pub use text_edit::{
    AppendTextFileTool, CreateTextFileTool, DeleteTextFileTool, GetTextFileTool,
    InsertTextFileTool, PatchTextFileTool,
};
