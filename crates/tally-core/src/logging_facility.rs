//! Structured logging for tally operations
//!
//! Two operations are bracketed today: `calculate` (the Calculator facade)
//! and `dispatch` (one interactive line, with its `request_id`). Events go to
//! stderr so stdout only ever carries calculator output.
//!
//! ```rust
//! use tally_core::logging_facility::{init, Profile};
//!
//! init(Profile::Production);
//! ```
//!
//! Tests install [`init_test_capture`] instead and query events by
//! `op`/`event` pair.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
