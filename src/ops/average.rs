//! Arithmetic mean of a numeric column.

use crate::error::{TableError, TableResult};
use crate::types::{ColumnData, Table};

/// Return the arithmetic mean of a column's values.
///
/// Preconditions, in order, each short-circuiting the next:
///
/// 1. the column must exist, else [`TableError::ColumnNotFound`]
/// 2. the column must have at least one cell, else [`TableError::EmptyColumn`]
/// 3. the column must be numeric, else [`TableError::NonNumericColumn`]
///
/// Missing cells are excluded from both the sum and the count. A non-empty
/// column whose cells are all missing yields `NaN`.
pub fn column_average(table: &Table, column: &str) -> TableResult<f64> {
    let col = table
        .column(column)
        .ok_or_else(|| TableError::ColumnNotFound(column.to_owned()))?;
    if col.is_empty() {
        return Err(TableError::EmptyColumn(column.to_owned()));
    }
    let values = match &col.data {
        ColumnData::Number(values) => values,
        ColumnData::Text(_) => return Err(TableError::NonNumericColumn(column.to_owned())),
    };

    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values.iter().flatten() {
        sum += v;
        count += 1;
    }
    Ok(sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::column_average;
    use crate::error::TableError;
    use crate::types::{Column, Table};

    fn sepal_table() -> Table {
        Table::new(vec![
            Column::numeric("sepal_length", vec![Some(5.1), Some(4.9), Some(4.7)]),
            Column::text(
                "species",
                vec![Some("setosa".to_string()), Some("setosa".to_string()), None],
            ),
        ])
    }

    #[test]
    fn average_of_numeric_column() {
        let avg = column_average(&sepal_table(), "sepal_length").unwrap();
        assert!((avg - 4.9).abs() < 1e-12);
    }

    #[test]
    fn missing_cells_are_excluded_from_sum_and_count() {
        let table = Table::new(vec![Column::numeric(
            "score",
            vec![Some(10.0), None, Some(5.0)],
        )]);
        assert_eq!(column_average(&table, "score").unwrap(), 7.5);
    }

    #[test]
    fn all_missing_numeric_column_averages_to_nan() {
        let table = Table::new(vec![Column::numeric("score", vec![None, None])]);
        assert!(column_average(&table, "score").unwrap().is_nan());
    }

    #[test]
    fn missing_column_is_checked_first() {
        let empty = Table::new(vec![Column::numeric("score", vec![])]);
        let err = column_average(&empty, "missing").unwrap_err();
        assert!(matches!(err, TableError::ColumnNotFound(name) if name == "missing"));
    }

    #[test]
    fn empty_column_is_rejected_before_the_type_check() {
        let table = Table::new(vec![Column::text("species", vec![])]);
        let err = column_average(&table, "species").unwrap_err();
        assert!(matches!(err, TableError::EmptyColumn(name) if name == "species"));
    }

    #[test]
    fn text_column_is_rejected() {
        let err = column_average(&sepal_table(), "species").unwrap_err();
        assert!(matches!(err, TableError::NonNumericColumn(name) if name == "species"));
    }
}
