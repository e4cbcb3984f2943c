//! Loading delimited text into a [`crate::types::Table`].
//!
//! Most callers should use [`load_table`] (from [`load`]), which loads a CSV
//! file and optionally reports the outcome to a [`LoadObserver`]. The
//! format-specific entrypoints live in [`csv`]:
//!
//! - [`csv::load_csv_from_path`]
//! - [`csv::load_csv_from_reader`]

pub mod csv;
pub mod load;
pub mod observe;

pub use csv::{load_csv_from_path, load_csv_from_reader};
pub use load::{LoadOptions, load_table};
pub use observe::{LoadContext, LoadObserver, LoadSeverity, LoadStats, StdErrObserver};
