//! Domain model for proftree
//!
//! This module contains the shared vocabulary types and errors that provide:
//! - Self-documenting function signatures
//! - Structured error handling

pub mod errors;
pub mod types;

// Re-export common types for convenience
pub use types::{ColorTag, Column, SortState};

pub use errors::LoadError;
