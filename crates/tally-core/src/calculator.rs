//! Calculator facade
//!
//! The programmatic entry point that both computes and records history.
//!
//! Every operation builds a `Calculation`, evaluates it and appends it to the
//! owned `HistoryStore`. Recording does not depend on the outcome, so a
//! division by zero is still present in the history even though the call
//! itself fails.
//!
//! ## Example
//!
//! ```
//! use bigdecimal::BigDecimal;
//! use tally_core::Calculator;
//!
//! let mut calc = Calculator::new();
//! let sum = calc.add(BigDecimal::from(5), BigDecimal::from(3)).unwrap();
//! assert_eq!(sum, BigDecimal::from(8));
//! assert_eq!(calc.history().len(), 1);
//! ```

use bigdecimal::BigDecimal;

use crate::errors::Result;
use crate::model::{Calculation, Operation};
use crate::ops::HistoryStore;
use crate::{log_op_end, log_op_error, log_op_start};

/// Facade owning a HistoryStore
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    history: HistoryStore,
}

impl Calculator {
    /// Create a Calculator with a fresh, empty history
    pub fn new() -> Self {
        Self::with_history(HistoryStore::new())
    }

    /// Create a Calculator around an existing history
    pub fn with_history(history: HistoryStore) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryStore {
        &mut self.history
    }

    /// Give the history back, consuming the Calculator
    pub fn into_history(self) -> HistoryStore {
        self.history
    }

    /// Record and evaluate `num1 + num2`
    pub fn add(&mut self, num1: BigDecimal, num2: BigDecimal) -> Result<BigDecimal> {
        self.calculate(num1, num2, Operation::Add)
    }

    /// Record and evaluate `num1 - num2`
    pub fn subtract(&mut self, num1: BigDecimal, num2: BigDecimal) -> Result<BigDecimal> {
        self.calculate(num1, num2, Operation::Subtract)
    }

    /// Record and evaluate `num1 * num2`
    pub fn multiply(&mut self, num1: BigDecimal, num2: BigDecimal) -> Result<BigDecimal> {
        self.calculate(num1, num2, Operation::Multiply)
    }

    /// Record and evaluate `num1 / num2`
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when `num2` is exactly zero.
    pub fn divide(&mut self, num1: BigDecimal, num2: BigDecimal) -> Result<BigDecimal> {
        self.calculate(num1, num2, Operation::Divide)
    }

    /// Record and evaluate an arbitrary operation
    ///
    /// # Errors
    ///
    /// Propagates the operation's error unchanged (only `DivisionByZero`).
    pub fn calculate(
        &mut self,
        num1: BigDecimal,
        num2: BigDecimal,
        operation: Operation,
    ) -> Result<BigDecimal> {
        log_op_start!("calculate", operation = operation.name());
        let start = std::time::Instant::now();

        let calculation = Calculation::create(num1, num2, operation);
        let result = calculation.perform();
        self.history.append(calculation);

        match result {
            Ok(value) => {
                log_op_end!(
                    "calculate",
                    duration_ms = start.elapsed().as_millis() as u64,
                    operation = operation.name(),
                    history_len = self.history.len() as u64
                );
                Ok(value)
            }
            Err(e) => {
                log_op_error!(
                    "calculate",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    operation = operation.name()
                );
                Err(e)
            }
        }
    }
}
