//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent across the engine, the
//! assertion context and the CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Comparison outcome
pub const FIELD_IS_SUCCESS: &str = "is_success";
pub const FIELD_ASSERTION_COUNT: &str = "assertion_count";
pub const FIELD_CHAIN_DEPTH: &str = "chain_depth";
pub const FIELD_DIVERGENCE_KIND: &str = "divergence_kind";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
