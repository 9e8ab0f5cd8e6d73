//! Command registry and dispatcher.

use std::collections::HashMap;
use std::io::{self, Write};
use std::time::Instant;

use tally_core::{log_op_end, log_op_error, log_op_start, ExError, Result, TallyError};
use tally_core_types::RequestContext;

use super::command::{Command, CommandContext};
use crate::render;

/// Maps command names to commands and runs input lines against them
///
/// Names are case-sensitive and matched exactly; registering an existing
/// name replaces the previous command.
#[derive(Default)]
pub struct CommandHandler {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandHandler {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register `command` under `name`, replacing any previous entry
    pub fn register<C>(&mut self, name: impl Into<String>, command: C)
    where
        C: Command + 'static,
    {
        self.commands.insert(name.into(), Box::new(command));
    }

    /// Look up a command by exact name
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Parse and run one input line
    ///
    /// Blank lines print `No command entered.`, unknown names print
    /// `No such command: <name>`, and any error a command returns is printed
    /// as `An error occurred: <message>`. Nothing a command returns escapes
    /// this call; the registry is left unchanged either way.
    ///
    /// Each line is logged as one `dispatch` operation under a fresh
    /// `request_id`; failures also carry the error code and command name.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing the failure line to `out` fails.
    pub fn dispatch(&self, line: &str, out: &mut dyn Write) -> io::Result<()> {
        let mut request = RequestContext::new();
        log_op_start!("dispatch", request_id = request.request_id.as_str());
        let start = Instant::now();

        let result = match CommandContext::parse(line) {
            Ok(ctx) => {
                request = request.with_command(ctx.command);
                self.run(&ctx.with_commands(self.names()), out)
            }
            Err(e) => Err(e),
        };
        let command = request.command.as_deref().unwrap_or_default();

        match result {
            Ok(()) => {
                log_op_end!(
                    "dispatch",
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = request.request_id.as_str(),
                    command = command
                );
                Ok(())
            }
            Err(e) => {
                let mut ex_err =
                    ExError::from(e.clone()).with_request_id(request.request_id.clone());
                if !command.is_empty() {
                    ex_err = ex_err.with_command(command);
                }
                log_op_error!(
                    "dispatch",
                    ex_err,
                    duration_ms = start.elapsed().as_millis() as u64,
                    command = command
                );
                writeln!(out, "{}", render::dispatch_error(&e))
            }
        }
    }

    fn run(&self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
        let command = self
            .get(ctx.command)
            .ok_or_else(|| TallyError::UnknownCommand {
                name: ctx.command.to_string(),
            })?;

        command.execute(ctx, out)
    }
}

impl std::fmt::Debug for CommandHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandHandler")
            .field("commands", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl Command for Echo {
        fn execute(&self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "{}", ctx.args.join(" "))?;
            Ok(())
        }
    }

    struct Shout;

    impl Command for Shout {
        fn execute(&self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "{}", ctx.args.join(" ").to_uppercase())?;
            Ok(())
        }
    }

    /// Prints the name it was invoked under and the registry it saw
    struct WhoAmI;

    impl Command for WhoAmI {
        fn execute(&self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "{} of {}", ctx.command, ctx.commands.join(","))?;
            Ok(())
        }
    }

    fn run(handler: &CommandHandler, line: &str) -> String {
        let mut out = Vec::new();
        handler.dispatch(line, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_register_and_lookup() {
        let mut handler = CommandHandler::new();
        handler.register("echo", Echo);

        assert!(handler.contains("echo"));
        assert!(!handler.contains("Echo"));
        assert_eq!(handler.len(), 1);
    }

    #[test]
    fn test_last_registration_wins() {
        let mut handler = CommandHandler::new();
        handler.register("say", Echo);
        handler.register("say", Shout);

        assert_eq!(handler.len(), 1);
        assert_eq!(run(&handler, "say hi"), "HI\n");
    }

    #[test]
    fn test_dispatch_passes_arguments() {
        let mut handler = CommandHandler::new();
        handler.register("echo", Echo);
        assert_eq!(run(&handler, "echo a  b"), "a b\n");
    }

    #[test]
    fn test_context_carries_invoked_name_and_registry() {
        let mut handler = CommandHandler::new();
        handler.register("who", WhoAmI);
        handler.register("also", WhoAmI);

        assert_eq!(run(&handler, "who"), "who of also,who\n");
        assert_eq!(run(&handler, "also x"), "also of also,who\n");
    }

    #[test]
    fn test_names_are_sorted() {
        let mut handler = CommandHandler::new();
        handler.register("b", Echo);
        handler.register("a", Echo);
        assert_eq!(handler.names(), vec!["a", "b"]);
    }
}
