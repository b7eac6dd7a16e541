//! Classify command
//!
//! Usage: deepeq classify <FILE>

use super::load_fixture;
use clap::Args;
use deepeq_core::classify::{classify, type_name};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Fixture file to classify
    pub file: PathBuf,
}

/// Execute classify command
pub fn execute(args: ClassifyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let value = load_fixture(&args.file)?;
    let kind = classify(&value);

    tracing::debug!(kind = kind.as_str(), "classified fixture");
    println!("{}\t{}", kind, type_name(&value));

    Ok(())
}
