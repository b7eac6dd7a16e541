//! Structured logging facility for deepeq
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! The comparison engine itself only emits `tracing::debug!` events; operation
//! boundaries are logged by its callers (assertion context, CLI).
//!
//! # Usage
//!
//! ```rust
//! use deepeq_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
