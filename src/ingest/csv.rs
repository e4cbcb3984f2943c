//! CSV loading and per-column type inference.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{TableError, TableResult};
use crate::types::{Column, Table};

/// Markers treated as a missing cell, compared case-insensitively after
/// trimming. The empty cell is always missing.
const MISSING_MARKERS: [&str; 4] = ["na", "n/a", "nan", "null"];

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || MISSING_MARKERS.iter().any(|m| cell.eq_ignore_ascii_case(m))
}

/// Load a CSV file into an in-memory [`Table`].
///
/// Rules:
///
/// - The first row is the header and defines the column names, in order.
/// - Cell types are inferred per column: a column is numeric iff every
///   non-missing cell parses as a number, otherwise it is text.
/// - Empty cells and `NA`/`N/A`/`NaN`/`null` are missing values.
///
/// Fails with [`TableError::NotFound`] when the path cannot be opened and
/// with [`TableError::EmptyData`] when the source has no header structure at
/// all. A header with zero data rows loads as a zero-row table.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> TableResult<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TableError::NotFound {
        path: path.display().to_string(),
        source,
    })?;
    load_csv_from_reader(file)
}

/// Load CSV data from an existing reader. Same rules as
/// [`load_csv_from_path`], except an unreadable source surfaces as a
/// [`TableError::Csv`] since there is no path to report.
pub fn load_csv_from_reader<R: Read>(reader: R) -> TableResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(TableError::EmptyData);
    }

    // Pass one: collect the raw cell grid, column-major. The csv reader
    // rejects ragged rows, so every record matches the header width.
    let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for result in rdr.records() {
        let record = result?;
        for (cells, cell) in raw.iter_mut().zip(record.iter()) {
            cells.push(cell.trim().to_owned());
        }
    }

    // Pass two: tag each column and build typed storage.
    let columns = headers
        .into_iter()
        .zip(raw)
        .map(|(name, cells)| build_column(name, cells))
        .collect();

    Ok(Table::new(columns))
}

/// A column is numeric iff every non-missing cell parses as `f64`. A column
/// with no non-missing cells counts as numeric, matching how dataframe
/// libraries type an all-NA column.
fn build_column(name: String, cells: Vec<String>) -> Column {
    let numeric = cells
        .iter()
        .filter(|c| !is_missing(c))
        .all(|c| c.parse::<f64>().is_ok());

    if numeric {
        let values = cells
            .iter()
            .map(|c| if is_missing(c) { None } else { c.parse().ok() })
            .collect();
        Column::numeric(name, values)
    } else {
        let values = cells
            .into_iter()
            .map(|c| if is_missing(&c) { None } else { Some(c) })
            .collect();
        Column::text(name, values)
    }
}
