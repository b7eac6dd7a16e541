//! Core types shared across deepeq facilities
//!
//! - **Schema constants**: canonical structured-logging field keys and
//!   event names used by the logging macros and test capture.

pub mod schema;
