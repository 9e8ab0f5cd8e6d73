//! Calc command
//!
//! Usage: tally calc <A> <B> <OPERATION>

use clap::Args;
use tally_core::Calculator;
use tally_engine::calculate_and_print;

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// First operand
    #[arg(allow_hyphen_values = true)]
    pub a: String,

    /// Second operand
    #[arg(allow_hyphen_values = true)]
    pub b: String,

    /// Operation word: add, subtract, multiply or divide
    pub operation: String,
}

/// Execute calc command
pub fn execute(args: CalcArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut calculator = Calculator::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    calculate_and_print(
        &args.a,
        &args.b,
        &args.operation,
        &mut calculator,
        &mut out,
    )?;

    Ok(())
}
