//! Assertion context built on the equality engine.
//!
//! `equals` and `not_equals` run [`compare`], add the result's assertion
//! count to a running total, and turn a disagreement with the assertion's
//! polarity into an [`ExError`] of kind `AssertionFailed` whose message is
//! the formatted comparison.
//!
//! Operation boundaries:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure

use crate::compare::{compare, format_result, EqualityResult};
use crate::errors::{DeepEqError, ExError};
use crate::value::Value;
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

/// A recorded assertion failure.
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionFailure {
    /// `assert_equals` or `assert_not_equals`
    pub op: &'static str,
    pub message: String,
}

/// Accumulates assertion counts and failures across many comparisons.
#[derive(Debug, Default)]
pub struct AssertionContext {
    assertion_count: u32,
    failures: Vec<AssertionFailure>,
}

impl AssertionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total atomic comparisons performed by all assertions so far.
    pub fn assertion_count(&self) -> u32 {
        self.assertion_count
    }

    pub fn failures(&self) -> &[AssertionFailure] {
        &self.failures
    }

    pub fn is_passing(&self) -> bool {
        self.failures.is_empty()
    }

    /// Assert that `actual` deeply equals `expected`.
    ///
    /// # Errors
    ///
    /// `AssertionFailed` with the formatted divergence when the values differ.
    pub fn equals(
        &mut self,
        expected: &Value,
        actual: &Value,
        message: Option<&str>,
    ) -> Result<(), ExError> {
        self.check("assert_equals", expected, actual, true, |result| {
            format_result(result, message)
        })
    }

    /// Assert that `actual` does not deeply equal `expected`.
    ///
    /// # Errors
    ///
    /// `AssertionFailed` when the values are equal.
    pub fn not_equals(
        &mut self,
        expected: &Value,
        actual: &Value,
        message: Option<&str>,
    ) -> Result<(), ExError> {
        self.check("assert_not_equals", expected, actual, false, |result| {
            let mut out = String::new();
            if let Some(message) = message.filter(|m| !m.is_empty()) {
                out.push_str(message);
                out.push('\n');
            }
            out.push_str(&format!(
                "Expected values to differ, both were: {}",
                result.comparison_node.actual
            ));
            out
        })
    }

    fn check<F>(
        &mut self,
        op: &'static str,
        expected: &Value,
        actual: &Value,
        want_equal: bool,
        describe: F,
    ) -> Result<(), ExError>
    where
        F: FnOnce(&EqualityResult) -> String,
    {
        let start = Instant::now();
        log_op_start!(op);

        let result = compare(expected, actual);
        self.assertion_count += result.assertion_count;
        let elapsed = start.elapsed().as_millis() as u64;

        if result.is_success == want_equal {
            log_op_end!(
                op,
                duration_ms = elapsed,
                assertion_count = result.assertion_count
            );
            return Ok(());
        }

        let err = DeepEqError::AssertionFailed {
            message: describe(&result),
        };
        log_op_error!(op, err.clone(), duration_ms = elapsed);
        self.failures.push(AssertionFailure {
            op,
            message: err.to_string(),
        });
        Err(ExError::from(err).with_op(op))
    }
}
