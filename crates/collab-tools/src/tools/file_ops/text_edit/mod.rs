//! Line-range editing of text files with optimistic concurrency control
//!
//! Six tools share one engine: `get_text_file_contents`,
//! `create_text_file`, `append_text_file_contents`,
//! `insert_text_file_contents`, `delete_text_file_contents`, and
//! `patch_text_file_contents`. Every operation reads the target file
//! fresh, verifies any caller-supplied content digest against what is on
//! disk right now, computes the full new content, and commits it with an
//! atomic rename. Nothing is cached between calls and no locks are taken;
//! two uncoordinated writers can race, but the loser gets a `Conflict`
//! instead of silently clobbering the winner.
//!
//! Digests are range-level: a hash always covers a contiguous line span
//! (lines including their terminators), with the whole file being the
//! full span. Patch and delete verify the span they replace; append and
//! insert, which replace nothing, verify the full span when the caller
//! supplies an expectation.

mod append;
mod create;
mod delete;
mod editor;
mod get;
mod hash;
mod indexer;
mod insert;
mod patch;
mod types;
mod writer;

#[cfg(test)]
mod tests;

pub use append::AppendTextFileTool;
pub use create::CreateTextFileTool;
pub use delete::DeleteTextFileTool;
pub use editor::{apply, EditOperation, EditResult};
pub use get::GetTextFileTool;
pub use insert::InsertTextFileTool;
pub use patch::PatchTextFileTool;
pub use types::{FileSnapshot, LineEnding, LineRange};
