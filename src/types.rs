//! Core data model: a [`Table`] of named, typed columns.
//!
//! Columns are tagged at load time as numeric or text (see
//! [`crate::ingest::csv`]); each cell is an explicit `Option`, with `None`
//! marking a missing value. Missing cells are excluded from numeric
//! reductions and never match an equality filter.

use std::fmt;

/// A single scalar value: a filter target, or a cell pulled out of a column.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit float. Integer-looking cells also land here.
    Number(f64),
    /// UTF-8 string.
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Typed storage for one column.
///
/// The tag is decided once, at load time, by a two-pass scan over the raw
/// cells; it never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Every non-missing cell parsed as a number.
    Number(Vec<Option<f64>>),
    /// At least one non-missing cell did not parse as a number.
    Text(Vec<Option<String>>),
}

impl ColumnData {
    /// Number of cells (missing cells included).
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Number(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    /// Whether the column has zero cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named, ordered sequence of scalar cells within a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name, unique within its table.
    pub name: String,
    /// Tagged cell storage.
    pub data: ColumnData,
}

impl Column {
    /// Create a numeric column.
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Number(values),
        }
    }

    /// Create a text column.
    pub fn text(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Text(values),
        }
    }

    /// Number of cells (missing cells included).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the column has zero cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the column is tagged numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self.data, ColumnData::Number(_))
    }

    /// The cell at `row`, or `None` if it is missing (or out of range).
    pub fn value(&self, row: usize) -> Option<Value> {
        match &self.data {
            ColumnData::Number(v) => v.get(row).copied().flatten().map(Value::Number),
            ColumnData::Text(v) => v.get(row).cloned().flatten().map(Value::Text),
        }
    }
}

/// In-memory tabular dataset: an ordered list of equal-length columns.
///
/// All operations in [`crate::ops`] take a `Table` by reference and leave it
/// untouched; filtering returns a new `Table`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Columns in header order. All columns hold the same number of cells.
    pub columns: Vec<Column>,
}

impl Table {
    /// Create a table from columns.
    ///
    /// # Panics
    ///
    /// Panics if the columns do not all have the same length.
    pub fn new(columns: Vec<Column>) -> Self {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for col in &columns {
                assert!(
                    col.len() == expected,
                    "column '{}' has {} cells but '{}' has {}",
                    col.name,
                    col.len(),
                    first.name,
                    expected
                );
            }
        }
        Self { columns }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Iterate column names in header order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Create a new table containing only the rows whose index matches
    /// `predicate`, preserving column set and relative row order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(usize) -> bool,
    {
        let keep: Vec<usize> = (0..self.row_count()).filter(|&i| predicate(i)).collect();
        let columns = self
            .columns
            .iter()
            .map(|col| {
                let data = match &col.data {
                    ColumnData::Number(v) => {
                        ColumnData::Number(keep.iter().map(|&i| v[i]).collect())
                    }
                    ColumnData::Text(v) => {
                        ColumnData::Text(keep.iter().map(|&i| v[i].clone()).collect())
                    }
                };
                Column {
                    name: col.name.clone(),
                    data,
                }
            })
            .collect();
        Self { columns }
    }

    /// The first `n` rows as a new table (fewer if the table is shorter).
    pub fn head(&self, n: usize) -> Self {
        self.filter_rows(|i| i < n)
    }
}

impl fmt::Display for Table {
    /// Plain-text rendering: one header line, then one line per row, cells
    /// space-padded to the widest entry of their column. Missing cells print
    /// as `NA`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = |col: &Column, row: usize| -> String {
            col.value(row).map_or_else(|| "NA".to_owned(), |v| v.to_string())
        };

        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|col| {
                (0..self.row_count())
                    .map(|row| cell(col, row).len())
                    .chain([col.name.len()])
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (col, &width) in self.columns.iter().zip(&widths) {
            write!(f, "{:>width$}  ", col.name)?;
        }
        writeln!(f)?;
        for row in 0..self.row_count() {
            for (col, &width) in self.columns.iter().zip(&widths) {
                write!(f, "{:>width$}  ", cell(col, row))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
