//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "proftree",
    about = "Browse hierarchical CSV performance profiles",
    after_help = "\
EXAMPLES:
    proftree profile.csv                     Interactive tree view
    proftree profile.csv --filter render     Start with a name filter applied
    proftree profile.csv --headless          Print the tree to stdout and exit"
)]
pub struct Args {
    /// Profile CSV file with Profile,Count,TotalTime,Min,Max,Avg columns
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Initial name filter (case-insensitive substring)
    #[arg(long, default_value = "")]
    pub filter: String,

    /// Initial sort column (Profile, Count, TotalTime, Min, Max or Avg)
    #[arg(long, value_name = "COLUMN")]
    pub sort: Option<String>,

    /// Print the projected tree to stdout instead of starting the TUI
    #[arg(long)]
    pub headless: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
