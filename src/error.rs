use thiserror::Error;

/// Convenience result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Error type returned by loading and by the column operations.
///
/// Every operation either returns a fully valid result or fails with one of
/// these kinds at the first violated precondition; nothing partially completes.
#[derive(Debug, Error)]
pub enum TableError {
    /// The load source could not be opened or read.
    #[error("could not read table source '{path}': {source}")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The load source contains no parseable content (not even a header).
    #[error("source contains no parseable data")]
    EmptyData,

    /// A CSV defect past the header (ragged row, invalid UTF-8, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The referenced column is absent from the table.
    #[error("column '{0}' not found in table")]
    ColumnNotFound(String),

    /// The referenced column has zero values.
    #[error("column '{0}' is empty")]
    EmptyColumn(String),

    /// An average was requested on a column holding non-numeric data.
    #[error("column '{0}' contains non-numeric data")]
    NonNumericColumn(String),

    /// An equality filter matched zero rows.
    #[error("no rows found where '{column}' equals '{value}'")]
    NoMatchingRows { column: String, value: String },
}
