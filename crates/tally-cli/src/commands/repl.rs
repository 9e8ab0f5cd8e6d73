//! Repl command
//!
//! Usage: tally repl [--quiet]
//!
//! Dispatches each stdin line through the default command registry until
//! `exit` or end of input.

use std::io::{self, BufRead, Write};

use clap::Args;
use tally_engine::{default_handler, CommandHandler};

const GREETING: &str = "Type 'menu' to list commands or 'exit' to quit.";
const EXIT_COMMAND: &str = "exit";

#[derive(Debug, Args)]
pub struct ReplArgs {
    /// Do not print the greeting line
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute repl command
pub fn execute(args: ReplArgs) -> Result<(), Box<dyn std::error::Error>> {
    let handler = default_handler();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run(&handler, stdin.lock(), &mut out, !args.quiet)?;
    Ok(())
}

/// Feed every line of `input` to `handler`
fn run(
    handler: &CommandHandler,
    input: impl BufRead,
    out: &mut dyn Write,
    greet: bool,
) -> io::Result<()> {
    if greet {
        writeln!(out, "{}", GREETING)?;
    }

    for line in input.lines() {
        let line = line?;
        if line.trim() == EXIT_COMMAND {
            break;
        }
        handler.dispatch(&line, out)?;
        out.flush()?;
    }

    Ok(())
}
