//! # proftree - Hierarchical CSV Profile Viewer
//!
//! proftree loads a CSV performance profile whose `Profile` column encodes a
//! call hierarchy (`Frame->Render->Shadows`), builds an in-memory tree from
//! the flat rows, and renders it as an interactive, sortable, filterable,
//! color-coded tree in the terminal.
//!
//! ## Architecture Overview
//!
//! ```text
//! profile.csv
//!     │  Profile,Count,TotalTime,Min,Max,Avg
//!     ▼
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │    Record    │──▶│   Profile    │──▶│  Projection  │──▶ TUI / stdout
//! │    Parser    │   │     Tree     │   │ (sort+filter)│
//! └──────────────┘   └──────┬───────┘   └──────────────┘
//!                           │
//!                           ▼
//!                    ┌──────────────┐
//!                    │  Colorizer   │
//!                    │ (rank tiers) │
//!                    └──────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`record`]: CSV row decoding into hierarchy paths plus metrics, with the
//!   zero-fallback policy for malformed numeric cells
//! - [`tree`]: tree construction from flat records, merging shared path
//!   prefixes into single nodes
//! - [`analysis`]: pure tree algorithms, independent of presentation
//!   - `colorizer`: per-sibling-group tier tagging of the slowest nodes
//!   - `sort`: recursive, stable re-ordering with toggle/reset direction
//!   - `project`: substring filtering that keeps ancestor chains visible
//! - [`format`]: the display contract for metric values
//! - [`tui`]: terminal UI (ratatui) with search, sorting keys, and
//!   expand/collapse
//! - [`cli`]: command-line argument parsing
//! - [`domain`]: shared vocabulary types and structured errors
//!
//! ## Key Invariants
//!
//! - Paths sharing a prefix merge at every shared ancestor; the tree never
//!   duplicates a name under the same parent
//! - Color tags are computed once per tree build over *all* children of each
//!   node; neither sorting nor filtering ever touches them
//! - Sorting is stable and applies independently at every depth
//! - A filtered projection always includes the ancestors of every match

pub mod analysis;
pub mod cli;
pub mod domain;
pub mod format;
pub mod record;
pub mod tree;
pub mod tui;
