//! Loading item records from a JSON file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tubelist::Record;

/// Accepted top-level shapes of an input file.
#[derive(Deserialize)]
#[serde(untagged)]
enum InputFile {
    /// A bare array of records.
    Records(Vec<Record>),
    /// An object wrapping the records in `items`.
    Wrapped {
        /// The records.
        items: Vec<Record>,
    },
}

/// Parses records from JSON text.
///
/// # Errors
///
/// Returns an error if `content` is neither an array of records nor an
/// object with an `items` array.
pub fn parse_records(content: &str) -> Result<Vec<Record>> {
    let input: InputFile = serde_json::from_str(content)
        .context("expected a JSON array of records or an object with an \"items\" array")?;
    Ok(match input {
        InputFile::Records(records) | InputFile::Wrapped { items: records } => records,
    })
}

/// Reads records from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records =
        parse_records(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(count = records.len(), path = %path.display(), "loaded records");
    Ok(records)
}
