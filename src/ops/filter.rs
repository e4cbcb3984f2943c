//! Equality row filtering.

use crate::error::{TableError, TableResult};
use crate::types::{ColumnData, Table, Value};

/// Return a new [`Table`] containing exactly the rows whose value in
/// `column` equals `target`.
///
/// The column must exist, else [`TableError::ColumnNotFound`]. Equality is
/// native-typed: numeric columns compare numerically, text columns as
/// strings. There is no explicit type-compatibility check; a target whose
/// type does not match the column simply matches zero rows, and missing
/// cells never match. A result with zero rows fails with
/// [`TableError::NoMatchingRows`].
///
/// The filtered table preserves the column set and the relative order of the
/// matching rows; the input table is not modified.
pub fn filter_by_category(table: &Table, column: &str, target: &Value) -> TableResult<Table> {
    let col = table
        .column(column)
        .ok_or_else(|| TableError::ColumnNotFound(column.to_owned()))?;

    let mask: Vec<bool> = match (&col.data, target) {
        (ColumnData::Number(values), Value::Number(t)) => {
            values.iter().map(|v| *v == Some(*t)).collect()
        }
        (ColumnData::Text(values), Value::Text(t)) => values
            .iter()
            .map(|v| v.as_deref() == Some(t.as_str()))
            .collect(),
        // Type mismatch: nothing can match.
        _ => vec![false; table.row_count()],
    };

    if !mask.iter().any(|&m| m) {
        return Err(TableError::NoMatchingRows {
            column: column.to_owned(),
            value: target.to_string(),
        });
    }

    Ok(table.filter_rows(|i| mask[i]))
}
