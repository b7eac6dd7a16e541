//! Structural equality and divergence tracing.
//!
//! Compares two runtime values and, when they differ, describes the single
//! path from the top-level value down to the first point of divergence.
//!
//! ## Entry point
//!
//! ```
//! use deepeq_core::compare::{compare, format_result};
//! use deepeq_core::Value;
//!
//! let expected = Value::array([Value::from(1), Value::from(2), Value::from(3)]);
//! let actual = Value::array([Value::from(1), Value::from(9), Value::from(3)]);
//!
//! let result = compare(&expected, &actual);
//! assert!(!result.is_success);
//! println!("{}", format_result(&result, Some("lists differ")));
//! ```
//!
//! ## Guarantees
//!
//! - **Short-circuit**: each level stops at its first divergence; the chain is
//!   never a multi-branch diff tree.
//! - **Size before contents**: collections of different sizes report
//!   `CollectionSize` without inspecting elements.
//! - **Key set before values**: maps and objects with different key sets
//!   report a `Set` divergence with `is_map_keys` before any value check.
//! - **Determinism**: identical inputs produce identical results.

pub mod engine;
pub mod format;
pub mod model;

pub use engine::{compare, deep_equals};
pub use format::format_result;
pub use model::{ComparisonNode, DivergenceInfo, DivergenceInfoKind, EqualityResult};
