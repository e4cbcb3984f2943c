//! Column operations over a [`crate::types::Table`].
//!
//! Each operation validates its preconditions in a fixed order and then
//! performs a single reduction or selection; there is no partial result. The
//! column-existence check always comes first, so a misspelled name fails with
//! [`crate::TableError::ColumnNotFound`] regardless of the table's contents.
//!
//! - [`column_average()`]: arithmetic mean of a numeric column
//! - [`column_max()`]: maximum value, native-typed
//! - [`filter_by_category()`]: equality row filter
//!
//! ## Example
//!
//! ```rust
//! use table_ops::ops::{column_average, column_max, filter_by_category};
//! use table_ops::types::{Column, Table, Value};
//!
//! let table = Table::new(vec![
//!     Column::numeric("sepal_length", vec![Some(5.1), Some(4.9), Some(4.7)]),
//!     Column::text(
//!         "species",
//!         vec![
//!             Some("setosa".to_string()),
//!             Some("versicolor".to_string()),
//!             Some("setosa".to_string()),
//!         ],
//!     ),
//! ]);
//!
//! let avg = column_average(&table, "sepal_length").unwrap();
//! assert!((avg - 4.9).abs() < 1e-12);
//!
//! assert_eq!(column_max(&table, "sepal_length").unwrap(), Value::Number(5.1));
//!
//! let setosa = filter_by_category(&table, "species", &Value::from("setosa")).unwrap();
//! assert_eq!(setosa.row_count(), 2);
//! ```

pub mod average;
pub mod filter;
pub mod max;

pub use average::column_average;
pub use filter::filter_by_category;
pub use max::column_max;
