use std::fmt;

use bigdecimal::BigDecimal;

use super::operation::Operation;
use crate::errors::Result;

/// Two operands bound to an operation, evaluated on demand
///
/// A Calculation stores no result; every call to `perform()` re-runs the
/// operation. Equality compares operand values and operation identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub operand1: BigDecimal,
    pub operand2: BigDecimal,
    pub operation: Operation,
}

impl Calculation {
    /// Create a new Calculation
    pub fn new(operand1: BigDecimal, operand2: BigDecimal, operation: Operation) -> Self {
        Self {
            operand1,
            operand2,
            operation,
        }
    }

    /// Alternative constructor mirroring `new`
    pub fn create(operand1: BigDecimal, operand2: BigDecimal, operation: Operation) -> Self {
        Self::new(operand1, operand2, operation)
    }

    /// Evaluate the operation over the stored operands
    ///
    /// # Errors
    ///
    /// Propagates `DivisionByZero` unchanged when the operation is `Divide`
    /// and the second operand is zero.
    pub fn perform(&self) -> Result<BigDecimal> {
        self.operation.apply(&self.operand1, &self.operand2)
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Calculation({}, {}, {})",
            self.operand1,
            self.operand2,
            self.operation.name()
        )
    }
}
