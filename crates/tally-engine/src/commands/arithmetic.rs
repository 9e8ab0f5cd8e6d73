//! Add, subtract, multiply and divide as interactive commands.

use std::io::Write;

use tally_core::bigdecimal::Zero;
use tally_core::{parse_decimal, BigDecimal, Calculation, Operation, Result, TallyError};

use super::command::{Command, CommandContext};
use crate::render;

const ARITY: usize = 2;

/// Interactive command bound to one Operation
///
/// Validates exactly two numeric arguments, evaluates a Calculation and
/// prints `The result of <a> <symbol> <b> is <result>`. Arity, numeric and
/// division-by-zero failures are printed here and never returned. Arity
/// messages name the command as it was invoked. Results are not recorded in
/// any history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArithmeticCommand {
    operation: Operation,
}

impl ArithmeticCommand {
    pub fn new(operation: Operation) -> Self {
        Self { operation }
    }

    pub fn add() -> Self {
        Self::new(Operation::Add)
    }

    pub fn subtract() -> Self {
        Self::new(Operation::Subtract)
    }

    pub fn multiply() -> Self {
        Self::new(Operation::Multiply)
    }

    pub fn divide() -> Self {
        Self::new(Operation::Divide)
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Validate the invocation and compute `(a, b, result)`
    ///
    /// # Errors
    ///
    /// `ArityMismatch`, `InvalidNumber` or `DivisionByZero`, checked in
    /// that order.
    pub fn evaluate(
        &self,
        ctx: &CommandContext<'_>,
    ) -> Result<(BigDecimal, BigDecimal, BigDecimal)> {
        let [a, b] = ctx.args.as_slice() else {
            return Err(TallyError::ArityMismatch {
                command: ctx.command.to_string(),
                expected: ARITY,
                actual: ctx.args.len(),
            });
        };

        let a = parse_decimal(a)?;
        let b = parse_decimal(b)?;

        if self.operation == Operation::Divide && b.is_zero() {
            return Err(TallyError::DivisionByZero);
        }

        let result = Calculation::create(a.clone(), b.clone(), self.operation).perform()?;
        Ok((a, b, result))
    }
}

impl Command for ArithmeticCommand {
    fn execute(&self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
        match self.evaluate(ctx) {
            Ok((a, b, result)) => {
                writeln!(
                    out,
                    "{}",
                    render::interactive_result(&a, self.operation, &b, &result)
                )?;
            }
            Err(e) => match render::command_error(&e) {
                Some(line) => writeln!(out, "{}", line)?,
                None => return Err(e),
            },
        }
        Ok(())
    }
}
