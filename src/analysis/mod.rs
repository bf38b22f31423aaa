//! Pure tree algorithms for the profile viewer
//!
//! This module contains the business logic operating on the profile tree,
//! separated from the TUI presentation layer.

pub mod colorizer;
pub mod project;
pub mod sort;

pub use colorizer::colorize;
pub use project::{project, Row};
pub use sort::{next_sort_state, sort_tree};
