//! CSV loading into named numeric columns.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

/// Error type for data loading operations.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse CSV: {0}")]
    CsvError(String),

    #[error("No columns found in file")]
    NoColumns,
}

/// Columns read from a CSV file, one numeric sequence per header.
#[derive(Debug, Clone, Default)]
pub struct LoadedTable {
    /// Values per column, all of length `rows`
    pub columns: HashMap<String, Vec<f64>>,
    /// Header names in file order
    pub headers: Vec<String>,
    /// Number of data rows
    pub rows: usize,
    /// Cells per column that could not be parsed and were read as 0.0
    pub coerced: HashMap<String, usize>,
}

impl LoadedTable {
    /// Total number of cells read as 0.0 because they were not numbers
    pub fn coerced_cells(&self) -> usize {
        self.coerced.values().sum()
    }
}

/// Parse a number that may use a comma as the decimal separator.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok()
}

/// Parse a cell, falling back to 0.0 for anything that is not a number.
///
/// Returns the value and whether the fallback was taken.
pub fn parse_cell(raw: &str) -> (f64, bool) {
    match parse_decimal(raw) {
        Some(value) => (value, false),
        None => (0.0, true),
    }
}

/// Parse a raw field, treating missing or undecodable bytes as a bad cell.
fn parse_field(field: Option<&[u8]>) -> (f64, bool) {
    match field.map(std::str::from_utf8) {
        Some(Ok(raw)) => parse_cell(raw),
        _ => (0.0, true),
    }
}

/// Load all columns of a CSV file.
pub fn load_csv_file(path: &Path, delimiter: u8) -> Result<LoadedTable, LoadError> {
    let file = File::open(path)
        .map_err(|e| LoadError::FileNotFound(format!("{}: {}", path.display(), e)))?;
    read_csv(BufReader::new(file), delimiter)
}

/// Read all columns of CSV data with a header row.
///
/// Short rows are padded with 0.0 and counted as coerced cells; extra fields
/// beyond the header are ignored. Fields are read as bytes so a cell in a
/// foreign encoding is coerced like any other bad cell, and header names are
/// decoded lossily.
pub fn read_csv<R: Read>(source: R, delimiter: u8) -> Result<LoadedTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(|e| LoadError::CsvError(e.to_string()))?
        .iter()
        .map(|h| String::from_utf8_lossy(h).trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::NoColumns);
    }

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    let mut coerced = vec![0usize; headers.len()];
    let mut rows = 0;

    for result in reader.byte_records() {
        let record = result.map_err(|e| LoadError::CsvError(e.to_string()))?;
        for (col, header) in headers.iter().enumerate() {
            let field = record.get(col);
            let (value, defaulted) = parse_field(field);
            if defaulted {
                let raw = String::from_utf8_lossy(field.unwrap_or_default());
                debug!(
                    column = %header,
                    row = rows + 1,
                    raw = %raw,
                    "non-numeric cell read as 0.0"
                );
                coerced[col] += 1;
            }
            values[col].push(value);
        }
        rows += 1;
    }

    let mut table = LoadedTable {
        rows,
        ..LoadedTable::default()
    };

    for ((header, column), bad) in headers.into_iter().zip(values).zip(coerced) {
        if table.columns.contains_key(&header) {
            warn!(column = %header, "duplicate column, keeping the first one");
            continue;
        }
        if bad > 0 {
            warn!(column = %header, cells = bad, rows, "non-numeric cells read as 0.0");
            table.coerced.insert(header.clone(), bad);
        }
        table.columns.insert(header.clone(), column);
        table.headers.push(header);
    }

    Ok(table)
}
