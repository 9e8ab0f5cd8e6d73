//! Tally Core - decimal calculator kernel
//!
//! This crate provides the foundational types and operations for tally,
//! including:
//! - The Operation Set (add, subtract, multiply, divide) over exact decimals
//! - `Calculation`, an operation bound to two operands and evaluated on demand
//! - `HistoryStore`, an append-only in-memory log of Calculations
//! - The `Calculator` facade, which evaluates and records in one step
//! - The shared decimal number syntax
//! - Error and structured logging facilities

pub mod calculator;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;

// Re-export commonly used types
pub use bigdecimal;
pub use tally_core_types::schema;
#[doc(hidden)]
pub use tracing;
pub use bigdecimal::BigDecimal;
pub use calculator::Calculator;
pub use errors::{ExError, ExErrorKind, Result, TallyError};
pub use model::{Calculation, Operation};
pub use ops::HistoryStore;
pub use rules::parse_decimal;
