//! Canonical schema constants for structured logging
//!
//! The logging macros emit these names and the test capture layer reads
//! them back, so both sides agree on spelling.

// Field keys every operation event carries
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Correlation and error fields
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_ERR_CODE: &str = "err_code";

// Event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
