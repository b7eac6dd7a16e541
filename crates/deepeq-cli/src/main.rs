//! deepeq CLI
//!
//! Command-line interface for comparing JSON fixture files

use clap::{Parser, Subcommand, ValueEnum};
use deepeq_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "deepeq")]
#[command(about = "deepeq - Structural equality with divergence tracing", long_about = None)]
struct Cli {
    /// Log output format; `RUST_LOG` overrides the level
    #[arg(long, value_enum, default_value_t = LogProfile::Prod, global = true)]
    log_profile: LogProfile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    /// Human-readable debug logs on stderr
    Dev,
    /// JSON info logs on stderr
    Prod,
}

impl From<LogProfile> for Profile {
    fn from(p: LogProfile) -> Self {
        match p {
            LogProfile::Dev => Profile::Development,
            LogProfile::Prod => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two fixture files and describe the first divergence
    Compare(commands::compare::CompareArgs),
    /// Print the structural kind of a fixture value
    Classify(commands::classify::ClassifyArgs),
}

fn main() {
    let cli = Cli::parse();
    init(cli.log_profile.into());

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Classify(args) => commands::classify::execute(args).map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
