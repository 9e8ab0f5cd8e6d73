//! Tally Engine - command orchestration layer
//!
//! Turns raw text into calculator work. Two entry points share the core
//! Operation Set and Calculation types:
//!
//! - the interactive path: `CommandHandler` parses a line, looks the command
//!   up in its registry and runs it (nothing is recorded in history);
//! - the batch path: `batch::calculate_and_print` drives the `Calculator`
//!   facade, which records every evaluation.

pub mod batch;
pub mod commands;
pub mod render;

pub use batch::calculate_and_print;
pub use commands::{
    default_handler, ArithmeticCommand, Command, CommandContext, CommandHandler, MenuCommand,
};
