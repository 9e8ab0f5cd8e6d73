//! Menu command - lists the available commands.

use std::io::Write;

use tally_core::Result;

use super::command::{Command, CommandContext};

/// Prints `Available commands:` followed by one indented name per line
///
/// The listing comes from the registry at the time of the call, so commands
/// registered after `menu` itself still show up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuCommand;

impl MenuCommand {
    pub const NAME: &'static str = "menu";
}

impl Command for MenuCommand {
    // Arguments are ignored.
    fn execute(&self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Available commands:")?;
        for name in &ctx.commands {
            writeln!(out, "  {}", name)?;
        }
        Ok(())
    }
}
