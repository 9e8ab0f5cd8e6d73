//! Operation logging macros
//!
//! Each macro emits one event tagged with `component`, `op` and `event`
//! (names from `tally_core::schema`). Extra `key = value` fields are appended
//! verbatim. Callers need only `tally-core`; the macros reach `tracing`
//! through `$crate`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use tally_core::log_op_start;
/// log_op_start!("divide");
/// log_op_start!("dispatch", request_id = "req-1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($($field)+)?
        )
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use tally_core::log_op_end;
/// log_op_end!("divide", duration_ms = 0);
/// log_op_end!("calculate", duration_ms = 3, operation = "add");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)+)?
        )
    };
}

/// Log a failed operation
///
/// `err` is anything convertible into `ExError` (a `TallyError` or an
/// `ExError` already carrying context). Its stable code is always logged,
/// and its request id when one was attached.
///
/// # Example
///
/// ```
/// # use tally_core::{log_op_error, errors::TallyError};
/// log_op_error!("divide", TallyError::DivisionByZero, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {{
        let ex_err: $crate::errors::ExError = ($err).into();
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            request_id = ex_err.request_id().map(|id| id.as_str()),
            $($($field)+)?
        );
    }};
}
