//! Core runtime for the Collab tool server
//!
//! This crate defines the tool abstraction shared by all Collab tools:
//! the [`tools::Tool`] trait, the call/result/schema types, a registry,
//! and an executor that validates and dispatches calls with timeouts.

pub mod error;
pub mod tools;

pub use error::{CollabError, CollabResult, UnifiedError};
