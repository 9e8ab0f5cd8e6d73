//! Interactive command layer.
//!
//! - `command.rs` - the `Command` trait and `CommandContext`
//! - `registry.rs` - `CommandHandler`, the name-keyed registry and dispatcher
//! - `arithmetic.rs` - add/subtract/multiply/divide commands
//! - `menu.rs` - lists registered command names

pub mod arithmetic;
pub mod command;
pub mod menu;
pub mod registry;

pub use arithmetic::ArithmeticCommand;
pub use command::{Command, CommandContext};
pub use menu::MenuCommand;
pub use registry::CommandHandler;

use tally_core::Operation;

/// Registry with the four arithmetic commands and `menu`
pub fn default_handler() -> CommandHandler {
    let mut handler = CommandHandler::new();
    for operation in Operation::ALL {
        handler.register(operation.name(), ArithmeticCommand::new(operation));
    }
    handler.register(MenuCommand::NAME, MenuCommand);
    handler
}
