//! Batch entry point
//!
//! Evaluates one `(a, b, operation word)` triple through the `Calculator`
//! facade and prints a single line. Numbers are validated before the
//! operation word, using the same decimal syntax as the interactive commands.

use std::io::{self, Write};

use tally_core::{parse_decimal, Calculator, Operation};

use crate::render;

/// Evaluate and print one batch calculation
///
/// Prints one of:
/// - `The result of <num1> <word> <num2> is equal to <result>`
/// - `Invalid number input: <a> or <b> is not a valid number.`
/// - `Unknown operation: <word>`
/// - `An error occurred: Cannot divide by zero`
///
/// Successful and failed evaluations are both recorded in the calculator's
/// history; input that never reaches the facade is not. A zero divisor is
/// not pre-checked here: it reaches the facade, is recorded, and the facade's
/// `DivisionByZero` is rendered as the `An error occurred:` line.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn calculate_and_print(
    a: &str,
    b: &str,
    operation: &str,
    calculator: &mut Calculator,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out, "{}", calculate_line(a, b, operation, calculator))
}

/// Same as `calculate_and_print` but returns the line instead of writing it
pub fn calculate_line(a: &str, b: &str, operation: &str, calculator: &mut Calculator) -> String {
    let (num1, num2) = match (parse_decimal(a), parse_decimal(b)) {
        (Ok(num1), Ok(num2)) => (num1, num2),
        _ => return render::batch_invalid_number(a, b),
    };

    let Ok(operation) = operation.parse::<Operation>() else {
        return render::batch_unknown_operation(operation);
    };

    match calculator.calculate(num1.clone(), num2.clone(), operation) {
        Ok(result) => render::batch_result(&num1, operation, &num2, &result),
        Err(e) => render::unexpected_error(&e),
    }
}
