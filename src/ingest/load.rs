//! Unified load entrypoint.
//!
//! [`load_table`] is [`load_csv_from_path`](super::csv::load_csv_from_path)
//! plus optional observability: when an observer is configured it reports
//! `on_success` with row/column stats, `on_failure` with a computed severity,
//! and `on_alert` when that severity is at or above
//! [`LoadOptions::alert_at_or_above`].

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{TableError, TableResult};
use crate::types::Table;

use super::csv::load_csv_from_path;
use super::observe::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Options controlling [`load_table`] behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a CSV file into a [`Table`], reporting the outcome to the configured
/// observer.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use table_ops::ingest::{load_table, LoadOptions, StdErrObserver};
///
/// # fn main() -> Result<(), table_ops::TableError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     ..Default::default()
/// };
/// let table = load_table("data/iris.csv", &opts)?;
/// println!("rows={}", table.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_table(path: impl AsRef<Path>, options: &LoadOptions) -> TableResult<Table> {
    let path = path.as_ref();
    let ctx = LoadContext {
        path: path.to_path_buf(),
    };

    let result = load_csv_from_path(path);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(table) => obs.on_success(
                &ctx,
                LoadStats {
                    rows: table.row_count(),
                    columns: table.column_count(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// An unreadable source is Critical; everything detected past the open
/// (empty data, csv defects) is a plain Error.
fn severity_for_error(e: &TableError) -> LoadSeverity {
    match e {
        TableError::NotFound { .. } => LoadSeverity::Critical,
        TableError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        _ => LoadSeverity::Error,
    }
}
