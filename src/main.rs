//! # proftree - Main Entry Point
//!
//! Two operational modes:
//! - **Interactive TUI** (default): sortable, filterable, color-coded tree view
//! - **Headless** (`--headless`): print the projected tree to stdout and exit

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use proftree::analysis::{next_sort_state, project, sort_tree};
use proftree::cli::Args;
use proftree::domain::{Column, SortState};
use proftree::format::{format_count, format_ms};
use proftree::record;
use proftree::tree::ProfileTree;
use proftree::tui;

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            EXIT_ERROR
        }
    });
}

fn run() -> Result<()> {
    let args = Args::parse();

    let records = record::load_records(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;
    let mut tree = ProfileTree::build(&records);
    info!("built tree with {} nodes from {} records", tree.len(), records.len());

    if !args.quiet {
        println!("proftree v{}", env!("CARGO_PKG_VERSION"));
        println!("file: {}", args.file.display());
        println!("records: {}  nodes: {}", records.len(), tree.len());
    }

    // The load-time sort behaves like a first header click on the chosen
    // column, applied to the stored default state (ascending Avg), so the
    // default view comes out Avg-descending with the slowest nodes first.
    let initial_column = match args.sort.as_deref() {
        Some(name) => Column::from_name(name)
            .with_context(|| format!("unknown sort column '{name}'"))?,
        None => Column::Avg,
    };
    let sort_state = next_sort_state(SortState::default(), initial_column);
    sort_tree(&mut tree, sort_state);

    if args.headless {
        print_tree(&tree, &args.filter, args.quiet);
        return Ok(());
    }

    tui::run(tree, sort_state, args.filter)
}

/// Print the current projection as an indented, formatted table.
fn print_tree(tree: &ProfileTree, filter: &str, quiet: bool) {
    let rows = project(tree, filter);
    if !quiet {
        println!(
            "{:<50} {:>10} {:>20} {:>20} {:>20} {:>20}",
            "Profile", "Count", "TotalTime", "Min", "Max", "Avg"
        );
    }
    for row in rows {
        let label = format!("{}{}", "  ".repeat(row.depth), row.node.name);
        match row.node.metrics {
            Some(m) => println!(
                "{label:<50} {:>10} {:>20} {:>20} {:>20} {:>20}",
                format_count(m.count),
                format_ms(m.total_time),
                format_ms(m.min),
                format_ms(m.max),
                format_ms(m.avg)
            ),
            None => println!("{label}"),
        }
    }
}
