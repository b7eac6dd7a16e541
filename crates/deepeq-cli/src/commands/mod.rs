pub mod classify;
pub mod compare;

use deepeq_core::errors::{DeepEqError, ExError};
use deepeq_core::fixture::parse_fixture;
use deepeq_core::Value;
use std::path::Path;

/// Read and decode one fixture file
///
/// Failures carry the file path so the user can tell which side was bad.
pub fn load_fixture(path: &Path) -> Result<Value, ExError> {
    let bytes = std::fs::read(path).map_err(|e| located(path, DeepEqError::from(e)))?;
    parse_fixture(&bytes).map_err(|e| located(path, e))
}

fn located(path: &Path, err: DeepEqError) -> ExError {
    let cause = ExError::from(err);
    ExError::new(cause.kind())
        .with_op("load_fixture")
        .with_message(format!("{}: {}", path.display(), cause.message()))
        .with_source(cause)
}
