//! Command trait and invocation context.

use std::io::Write;

use tally_core::{Result, TallyError};

/// One invocation of a command
///
/// Built by the dispatcher from a raw line. `commands` lists every name
/// registered at the moment of the call, sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext<'a> {
    /// Name the command was invoked under
    pub command: &'a str,
    /// Tokens that followed the name
    pub args: Vec<&'a str>,
    pub commands: Vec<&'a str>,
}

impl<'a> CommandContext<'a> {
    /// Context for a direct call, outside any registry
    pub fn new(command: &'a str, args: Vec<&'a str>) -> Self {
        Self {
            command,
            args,
            commands: Vec::new(),
        }
    }

    /// Split a raw line on whitespace into name and arguments
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` if the line is empty after trimming.
    pub fn parse(line: &'a str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let command = tokens.next().ok_or(TallyError::EmptyInput)?;
        Ok(Self::new(command, tokens.collect()))
    }

    /// Attach the registered names visible to the command
    pub fn with_commands(mut self, commands: Vec<&'a str>) -> Self {
        self.commands = commands;
        self
    }
}

/// A named action the dispatcher can run
///
/// Implementations write their own output, including messages for failures
/// they know how to explain. Returning `Err` hands the failure to the
/// dispatcher, which prints `An error occurred: <message>`.
pub trait Command {
    /// Run the command for one invocation
    ///
    /// # Errors
    ///
    /// Returns any failure the command did not render itself, including
    /// I/O errors from writing to `out`.
    fn execute(&self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> Result<()>;
}
