//! Maximum value of a column.

use crate::error::{TableError, TableResult};
use crate::types::{ColumnData, Table, Value};

/// Return the maximum value in a column, in the column's native type.
///
/// Preconditions: the column must exist ([`TableError::ColumnNotFound`]) and
/// must have at least one cell ([`TableError::EmptyColumn`]). There is no
/// numeric precondition: numeric columns compare numerically, text columns
/// lexicographically.
///
/// Missing cells are skipped; a column with no non-missing cells fails with
/// [`TableError::EmptyColumn`] since there is no value to return.
pub fn column_max(table: &Table, column: &str) -> TableResult<Value> {
    let col = table
        .column(column)
        .ok_or_else(|| TableError::ColumnNotFound(column.to_owned()))?;
    if col.is_empty() {
        return Err(TableError::EmptyColumn(column.to_owned()));
    }

    let max = match &col.data {
        ColumnData::Number(values) => values
            .iter()
            .flatten()
            .copied()
            .reduce(f64::max)
            .map(Value::Number),
        ColumnData::Text(values) => values
            .iter()
            .flatten()
            .max()
            .map(|s| Value::Text(s.clone())),
    };

    max.ok_or_else(|| TableError::EmptyColumn(column.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::column_max;
    use crate::error::TableError;
    use crate::types::{Column, Table, Value};

    #[test]
    fn max_of_numeric_column() {
        let table = Table::new(vec![Column::numeric(
            "petal_width",
            vec![Some(0.2), Some(0.2), Some(0.2), Some(0.4)],
        )]);
        assert_eq!(column_max(&table, "petal_width").unwrap(), Value::Number(0.4));
    }

    #[test]
    fn max_of_text_column_is_lexicographic() {
        let table = Table::new(vec![Column::text(
            "species",
            vec![
                Some("virginica".to_string()),
                Some("setosa".to_string()),
                Some("versicolor".to_string()),
            ],
        )]);
        assert_eq!(
            column_max(&table, "species").unwrap(),
            Value::Text("virginica".to_string())
        );
    }

    #[test]
    fn missing_cells_are_skipped() {
        let table = Table::new(vec![Column::numeric(
            "score",
            vec![None, Some(3.0), None, Some(1.0)],
        )]);
        assert_eq!(column_max(&table, "score").unwrap(), Value::Number(3.0));
    }

    #[test]
    fn missing_column_is_checked_first() {
        let table = Table::new(vec![Column::numeric("score", vec![])]);
        let err = column_max(&table, "other").unwrap_err();
        assert!(matches!(err, TableError::ColumnNotFound(name) if name == "other"));
    }

    #[test]
    fn empty_column_is_rejected() {
        let table = Table::new(vec![Column::text("species", vec![])]);
        let err = column_max(&table, "species").unwrap_err();
        assert!(matches!(err, TableError::EmptyColumn(_)));
    }

    #[test]
    fn all_missing_column_is_treated_as_empty() {
        let table = Table::new(vec![Column::text("species", vec![None, None])]);
        let err = column_max(&table, "species").unwrap_err();
        assert!(matches!(err, TableError::EmptyColumn(_)));
    }
}
