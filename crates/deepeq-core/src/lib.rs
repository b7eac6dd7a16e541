//! deepeq core - structural equality and divergence tracing
//!
//! This crate provides the comparison engine behind `equals`/`notEquals`
//! style assertions:
//! - A runtime [`Value`] model with optional host capabilities
//! - Total structural classification ([`classify`])
//! - The recursive equality engine and its divergence chain ([`compare`])
//! - Human-readable failure rendering ([`compare::format_result`])
//! - An assertion context that accumulates counts and failures
//! - JSON fixture decoding for values JSON cannot express directly

pub mod assertion;
pub mod classify;
pub mod compare;
pub mod errors;
pub mod fixture;
pub mod logging_facility;
pub mod value;

pub use deepeq_core_types as core_types;

// Re-export commonly used types
pub use assertion::AssertionContext;
pub use classify::{classify, StructuralKind};
pub use compare::{
    compare, format_result, ComparisonNode, DivergenceInfo, DivergenceInfoKind, EqualityResult,
};
pub use errors::{DeepEqError, ExError, ExErrorKind, Result};
pub use value::{CustomValue, Equatable, Stringable, Value};
