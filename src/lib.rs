//! `table-ops` is a small library for loading CSV data into an in-memory
//! [`types::Table`] and running guarded single-column operations over it:
//! mean, max, and categorical row filtering.
//!
//! The primary entrypoint is [`ingest::load_table`], which reads a CSV file
//! (header row required), infers each column's type with a two-pass scan
//! (numeric iff every non-missing cell parses as a number, else text), and
//! keeps missing cells explicit so numeric reductions can exclude them.
//!
//! Every operation validates its preconditions up front and either returns a
//! complete result or fails with a descriptive [`TableError`]; nothing is
//! mutated and nothing partially completes.
//!
//! ## Quick example: load and summarize
//!
//! ```no_run
//! use table_ops::ingest::{load_table, LoadOptions};
//! use table_ops::ops::{column_average, column_max, filter_by_category};
//! use table_ops::types::Value;
//!
//! # fn main() -> Result<(), table_ops::TableError> {
//! let table = load_table("data/iris.csv", &LoadOptions::default())?;
//!
//! let avg = column_average(&table, "sepal_length")?;
//! let max = column_max(&table, "petal_width")?;
//! let setosa = filter_by_category(&table, "species", &Value::from("setosa"))?;
//! println!("avg={avg} max={max} setosa_rows={}", setosa.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## In-memory tables
//!
//! Tables can also be built directly, which the operations' own docs use:
//!
//! ```rust
//! use table_ops::ops::column_average;
//! use table_ops::types::{Column, Table};
//!
//! let table = Table::new(vec![Column::numeric(
//!     "score",
//!     vec![Some(10.0), None, Some(5.0)],
//! )]);
//! // The missing cell is excluded from both sum and count.
//! assert_eq!(column_average(&table, "score").unwrap(), 7.5);
//! ```
//!
//! ## Modules
//!
//! - [`ingest`]: CSV loading, type inference, and load observability
//! - [`ops`]: mean / max / equality-filter operations
//! - [`types`]: the in-memory table model
//! - [`error`]: the error taxonomy shared by all operations

pub mod error;
pub mod ingest;
pub mod ops;
pub mod types;

pub use error::{TableError, TableResult};
