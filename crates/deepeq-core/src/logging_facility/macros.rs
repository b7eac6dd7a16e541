//! Operation-boundary logging macros
//!
//! An assertion or CLI command logs exactly one `start` and then one `end`
//! or `end_error`. All three share the `component`, `op` and `event` keys
//! from [`schema`](crate::core_types::schema), and any trailing
//! `key = value` pairs are passed straight to `tracing`.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_boundary {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        )
    };
}

/// Mark the start of an operation
///
/// ```
/// # use deepeq_core::log_op_start;
/// log_op_start!("assert_equals");
/// log_op_start!("compare_files", expected = "left.json", actual = "right.json");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_boundary!(
            info,
            $op,
            $crate::core_types::schema::EVENT_START
            $(, $($field)*)?
        )
    };
}

/// Mark a successful end; `duration_ms` is mandatory
///
/// ```
/// # use deepeq_core::log_op_end;
/// log_op_end!("assert_equals", duration_ms = 0, assertion_count = 4);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_boundary!(
            info,
            $op,
            $crate::core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Mark a failed end at error level
///
/// `$err` converts into [`ExError`](crate::errors::ExError); its kind and
/// stable code are attached as `err_kind` and `err_code`.
///
/// ```
/// # use deepeq_core::log_op_error;
/// # use deepeq_core::errors::DeepEqError;
/// let err = DeepEqError::AssertionFailed { message: "1 != 2".to_string() };
/// log_op_error!("assert_equals", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_boundary!(
            error,
            $op,
            $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
