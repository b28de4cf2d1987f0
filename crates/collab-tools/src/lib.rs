//! Tool implementations for Collab
//!
//! Text-file range editing (`tools::file_ops::text_edit`) and git
//! pass-through operations (`tools::vcs`), all exposed through the
//! `collab_core` tool runtime.

pub mod tools;

pub use tools::get_default_tools;
