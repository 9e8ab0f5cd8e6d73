//! Literal output lines
//!
//! Every string the interactive and batch paths print is built here. Callers
//! match on these verbatim, so wording and punctuation are fixed.

use tally_core::{BigDecimal, Operation, TallyError};

pub const NO_COMMAND_ENTERED: &str = "No command entered.";
pub const INVALID_INPUT: &str = "Invalid input: Please provide valid numbers.";
pub const DIVISION_BY_ZERO: &str = "Error: Division by zero.";

/// `No such command: <name>`
pub fn unknown_command(name: &str) -> String {
    format!("No such command: {}", name)
}

/// `Error: '<name>' command requires exactly <n> arguments.`
pub fn arity_error(command: &str, expected: usize) -> String {
    format!(
        "Error: '{}' command requires exactly {} arguments.",
        command, expected
    )
}

/// `An error occurred: <message>`
pub fn unexpected_error(err: &TallyError) -> String {
    format!("An error occurred: {}", err)
}

/// `The result of <a> <symbol> <b> is <result>`
pub fn interactive_result(
    a: &BigDecimal,
    operation: Operation,
    b: &BigDecimal,
    result: &BigDecimal,
) -> String {
    format!(
        "The result of {} {} {} is {}",
        a,
        operation.symbol(),
        b,
        result
    )
}

/// Line printed by the dispatcher for an error that reached it
pub fn dispatch_error(err: &TallyError) -> String {
    match err {
        TallyError::EmptyInput => NO_COMMAND_ENTERED.to_string(),
        TallyError::UnknownCommand { name } => unknown_command(name),
        other => unexpected_error(other),
    }
}

/// Line printed by an arithmetic command for a recoverable failure
///
/// Returns `None` for errors the command must not swallow.
pub fn command_error(err: &TallyError) -> Option<String> {
    match err {
        TallyError::ArityMismatch {
            command, expected, ..
        } => Some(arity_error(command, *expected)),
        TallyError::InvalidNumber { .. } => Some(INVALID_INPUT.to_string()),
        TallyError::DivisionByZero => Some(DIVISION_BY_ZERO.to_string()),
        _ => None,
    }
}

/// `The result of <num1> <word> <num2> is equal to <result>`
pub fn batch_result(
    num1: &BigDecimal,
    operation: Operation,
    num2: &BigDecimal,
    result: &BigDecimal,
) -> String {
    format!(
        "The result of {} {} {} is equal to {}",
        num1,
        operation.name(),
        num2,
        result
    )
}

/// `Invalid number input: <a> or <b> is not a valid number.`
pub fn batch_invalid_number(a: &str, b: &str) -> String {
    format!("Invalid number input: {} or {} is not a valid number.", a, b)
}

/// `Unknown operation: <word>`
pub fn batch_unknown_operation(word: &str) -> String {
    format!("Unknown operation: {}", word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_error_lines() {
        assert_eq!(dispatch_error(&TallyError::EmptyInput), NO_COMMAND_ENTERED);
        assert_eq!(
            dispatch_error(&TallyError::UnknownCommand {
                name: "bogus".to_string()
            }),
            "No such command: bogus"
        );
        assert_eq!(
            dispatch_error(&TallyError::command_failed("boom")),
            "An error occurred: boom"
        );
    }

    #[test]
    fn test_command_error_only_covers_recoverable_kinds() {
        assert_eq!(
            command_error(&TallyError::ArityMismatch {
                command: "add".to_string(),
                expected: 2,
                actual: 1
            })
            .as_deref(),
            Some("Error: 'add' command requires exactly 2 arguments.")
        );
        assert_eq!(
            command_error(&TallyError::DivisionByZero).as_deref(),
            Some(DIVISION_BY_ZERO)
        );
        assert!(command_error(&TallyError::command_failed("x")).is_none());
    }

    #[test]
    fn test_batch_lines() {
        assert_eq!(
            batch_result(
                &BigDecimal::from(5),
                Operation::Add,
                &BigDecimal::from(3),
                &BigDecimal::from(8)
            ),
            "The result of 5 add 3 is equal to 8"
        );
        assert_eq!(
            batch_invalid_number("a", "3"),
            "Invalid number input: a or 3 is not a valid number."
        );
        assert_eq!(batch_unknown_operation("pow"), "Unknown operation: pow");
    }
}
