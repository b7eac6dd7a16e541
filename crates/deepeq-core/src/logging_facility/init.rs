//! Global subscriber setup
//!
//! Logs always go to stderr so that a CLI's stdout carries only the
//! comparison report.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Where and how log events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines, debug and up
    Development,
    /// One JSON object per event, info and up
    Production,
    /// Nothing is written; tests use `init_test_capture` instead
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is unset
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "deepeq=debug,deepeq_core=debug,deepeq_cli=debug",
            Profile::Production => "deepeq=info,deepeq_core=info,deepeq_cli=info",
            Profile::Test => "off",
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_filter()))
    }
}

static INSTALLED: Once = Once::new();

/// Install the global subscriber for `profile`.
///
/// The first call wins; later calls are ignored whatever profile they pass.
pub fn init(profile: Profile) {
    INSTALLED.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(profile.filter());
        match profile {
            Profile::Development => builder.init(),
            Profile::Production => builder.json().init(),
            Profile::Test => tracing_subscriber::registry().init(),
        }
    });
}
