//! Compare command
//!
//! Usage: deepeq compare <EXPECTED> <ACTUAL> [--message <TEXT>] [--json]

use super::load_fixture;
use clap::Args;
use deepeq_core::errors::{DeepEqError, ExError};
use deepeq_core::{compare, format_result, log_op_end, log_op_error, log_op_start};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Fixture file holding the expected value
    pub expected: PathBuf,

    /// Fixture file holding the actual value
    pub actual: PathBuf,

    /// Message printed above the comparison description
    #[arg(short, long)]
    pub message: Option<String>,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}

/// Execute compare command
///
/// Returns whether the two values were equal.
pub fn execute(args: CompareArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let start = Instant::now();
    log_op_start!(
        "compare_files",
        expected = %args.expected.display(),
        actual = %args.actual.display()
    );

    let outcome = run(&args);
    let elapsed = start.elapsed().as_millis() as u64;
    match &outcome {
        Ok(is_success) => log_op_end!(
            "compare_files",
            duration_ms = elapsed,
            is_success = *is_success
        ),
        Err(e) => log_op_error!("compare_files", e.clone(), duration_ms = elapsed),
    }

    Ok(outcome?)
}

fn run(args: &CompareArgs) -> Result<bool, ExError> {
    let expected = load_fixture(&args.expected)?;
    let actual = load_fixture(&args.actual)?;

    let result = compare(&expected, &actual);
    let description = format_result(&result, args.message.as_deref());

    if args.json {
        let report = serde_json::json!({
            "is_success": result.is_success,
            "assertion_count": result.assertion_count,
            "depth": result.comparison_node.depth(),
            "description": description,
            "result": result,
        });
        let text = serde_json::to_string_pretty(&report).map_err(|e| {
            ExError::from(DeepEqError::Serialization {
                reason: e.to_string(),
            })
            .with_op("compare_files")
        })?;
        println!("{}", text);
    } else {
        println!("{}", description);
    }

    Ok(result.is_success)
}
