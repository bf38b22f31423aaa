//! Record parsing for profile CSV files.
//!
//! The input is UTF-8, comma-separated, with a header row naming exactly
//! `Profile, Count, TotalTime, Min, Max, Avg`. The `Profile` cell encodes a
//! hierarchy path with a literal `->` delimiter. Numeric cells degrade to
//! `0.0` when unparsable; a header missing a required column is a hard
//! failure raised before any record is produced.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::domain::LoadError;

/// Column names the header must carry, in display order.
pub const REQUIRED_COLUMNS: [&str; 6] = ["Profile", "Count", "TotalTime", "Min", "Max", "Avg"];

/// Hierarchy-path delimiter inside the `Profile` cell.
pub const PATH_DELIMITER: &str = "->";

/// Numeric fields of one input row, in milliseconds except `count`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub count: f64,
    pub total_time: f64,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// One parsed input row: a hierarchy path plus its metrics.
///
/// `hierarchy` always has at least one segment; segments are taken as given,
/// whitespace included.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub hierarchy: Vec<String>,
    pub metrics: Metrics,
}

/// Raw CSV row before numeric interpretation.
///
/// Numeric cells stay `String` here so a malformed value degrades to zero
/// instead of failing the whole load.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Profile")]
    profile: String,
    #[serde(rename = "Count")]
    count: String,
    #[serde(rename = "TotalTime")]
    total_time: String,
    #[serde(rename = "Min")]
    min: String,
    #[serde(rename = "Max")]
    max: String,
    #[serde(rename = "Avg")]
    avg: String,
}

/// Parse a numeric cell, degrading to zero on failure.
///
/// This is the documented recovery policy: malformed numbers never abort a
/// load.
fn parse_or_zero(column: &str, cell: &str) -> f64 {
    cell.trim().parse().unwrap_or_else(|_| {
        debug!("unparsable {column} value {cell:?}, using 0.0");
        0.0
    })
}

impl Record {
    fn from_raw(raw: &RawRow) -> Self {
        let hierarchy = raw.profile.split(PATH_DELIMITER).map(str::to_owned).collect();
        Record {
            hierarchy,
            metrics: Metrics {
                count: parse_or_zero("Count", &raw.count),
                total_time: parse_or_zero("TotalTime", &raw.total_time),
                min: parse_or_zero("Min", &raw.min),
                max: parse_or_zero("Max", &raw.max),
                avg: parse_or_zero("Avg", &raw.avg),
            },
        }
    }
}

/// Load and parse all records from a profile CSV file.
///
/// The file is read fully before parsing begins; there is no streaming.
///
/// # Errors
/// Fails when the file is unreadable, the CSV is structurally invalid, or
/// the header misses a required column.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_records(&content)
}

/// Parse records from CSV text already in memory.
///
/// # Errors
/// Same failure modes as [`load_records`], minus I/O.
pub fn parse_records(content: &str) -> Result<Vec<Record>, LoadError> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());

    // Validate the header before touching any row.
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        records.push(Record::from_raw(&row?));
    }
    info!("parsed {} profile records", records.len());
    Ok(records)
}
