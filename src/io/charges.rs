//! External partial charges stored as CSV, one row per molecule.
//!
//! Row `n` (1-based) holds the comma-separated charges of the molecule whose
//! index is `n`, in native atom order. Only the requested row is parsed, so
//! malformed rows belonging to other molecules do not prevent a lookup.

use crate::io::{Format, error::Error};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum ChargeRow {
    Found(Vec<f64>),
    /// The file has only `rows` rows, fewer than requested.
    Missing { rows: usize },
}

/// Reads row `row` (1-based) from a charges CSV stream.
pub fn read_row<R: BufRead>(reader: R, row: usize) -> Result<ChargeRow, Error> {
    let mut rows = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        rows += 1;
        if row != 0 && i + 1 == row {
            return parse_row(&line, i + 1).map(ChargeRow::Found);
        }
    }

    Ok(ChargeRow::Missing { rows })
}

pub fn read_row_from_path(path: &Path, row: usize) -> Result<ChargeRow, Error> {
    let file = File::open(path)?;
    read_row(BufReader::new(file), row)
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<f64>, Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(',')
        .enumerate()
        .map(|(col, field)| {
            let value = field.trim().trim_matches('"').trim();
            value.parse::<f64>().map_err(|_| {
                Error::parse(
                    Format::Charges,
                    line_no,
                    format!("invalid charge '{}' in column {}", value, col + 1),
                )
            })
        })
        .collect()
}
