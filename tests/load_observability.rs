use std::sync::{Arc, Mutex};

use table_ops::TableError;
use table_ops::ingest::{LoadContext, LoadObserver, LoadOptions, LoadSeverity, LoadStats, load_table};

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<LoadStats>>,
    failures: Mutex<Vec<LoadSeverity>>,
    alerts: Mutex<Vec<LoadSeverity>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, _ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &TableError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &TableError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn opts_with(observer: Arc<RecordingObserver>) -> LoadOptions {
    LoadOptions {
        observer: Some(observer),
        alert_at_or_above: LoadSeverity::Critical,
    }
}

#[test]
fn observer_receives_success_stats() {
    let obs = Arc::new(RecordingObserver::default());

    let table = load_table("tests/fixtures/iris_sample.csv", &opts_with(obs.clone())).unwrap();
    assert_eq!(table.row_count(), 6);

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(successes, vec![LoadStats { rows: 6, columns: 5 }]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_unreachable_path() {
    let obs = Arc::new(RecordingObserver::default());

    // Missing file -> NotFound -> Critical
    let _ = load_table("tests/fixtures/does_not_exist.csv", &opts_with(obs.clone())).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(failures, vec![LoadSeverity::Critical]);
    assert_eq!(alerts, vec![LoadSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_empty_source() {
    let obs = Arc::new(RecordingObserver::default());

    // Empty source -> EmptyData -> Error severity (not Critical) -> no alert
    let err = load_table("tests/fixtures/empty.csv", &opts_with(obs.clone())).unwrap_err();
    assert!(matches!(err, TableError::EmptyData));

    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(failures, vec![LoadSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}
