//! Demonstration workflow over the bundled Iris dataset.
//!
//! A linear script: load `data/iris.csv`, print the average sepal length and
//! the max petal width, then show the first rows of the setosa filter. Every
//! library error is caught once at the outermost level and printed as a
//! human-readable message.

use std::process::ExitCode;
use std::sync::Arc;

use table_ops::TableResult;
use table_ops::ingest::{LoadOptions, StdErrObserver, load_table};
use table_ops::ops::{column_average, column_max, filter_by_category};
use table_ops::types::Value;

fn run() -> TableResult<()> {
    let opts = LoadOptions {
        observer: Some(Arc::new(StdErrObserver)),
        ..Default::default()
    };
    let table = load_table("data/iris.csv", &opts)?;

    let avg_sepal = column_average(&table, "sepal_length")?;
    println!("Average sepal length: {avg_sepal}");

    let max_petal = column_max(&table, "petal_width")?;
    println!("Max petal width: {max_petal}");

    let setosa = filter_by_category(&table, "species", &Value::from("setosa"))?;
    println!();
    println!("First 5 rows where species is 'setosa':");
    print!("{}", setosa.head(5));

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
