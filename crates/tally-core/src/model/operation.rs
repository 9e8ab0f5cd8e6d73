use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::errors::{Result, TallyError};
use crate::ops::arithmetic;

/// One of the four binary operations a Calculation can carry
///
/// Each variant knows its stable word name (`add`, ...), used for history
/// filtering, rendering and batch input, and its operator glyph (`+`, ...),
/// used in interactive result lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations in canonical order
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Stable word name of the operation
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Human operator glyph
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Apply the operation to two operands
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for `Divide` when `b` is exactly zero.
    pub fn apply(&self, a: &BigDecimal, b: &BigDecimal) -> Result<BigDecimal> {
        match self {
            Operation::Add => Ok(arithmetic::add(a, b)),
            Operation::Subtract => Ok(arithmetic::subtract(a, b)),
            Operation::Multiply => Ok(arithmetic::multiply(a, b)),
            Operation::Divide => arithmetic::divide(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = TallyError;

    fn from_str(word: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == word)
            .ok_or_else(|| TallyError::UnknownOperation {
                word: word.to_string(),
            })
    }
}
