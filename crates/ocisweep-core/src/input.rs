//! Compartment list input
//!
//! The input file is a simple delimited text file with one compartment
//! OCID per row in the first column. Blank lines and rows with an empty
//! first field are skipped. Order is preserved and duplicates are kept;
//! a compartment listed twice is swept twice.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Read the compartment OCIDs from a file.
pub fn read_compartment_ids(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_compartment_ids(&contents))
}

fn parse_compartment_ids(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(first_field)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

/// First comma-delimited field of a row, trimmed, with optional quoting
/// removed.
fn first_field(line: &str) -> &str {
    line.split(',')
        .next()
        .unwrap_or("")
        .trim()
        .trim_matches('"')
}
