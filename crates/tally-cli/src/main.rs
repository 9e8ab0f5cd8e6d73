//! Tally CLI
//!
//! Command-line interface for the tally decimal calculator

use clap::{Parser, Subcommand, ValueEnum};
use tally_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "tally")]
#[command(about = "Tally - exact decimal calculator", long_about = None)]
struct Cli {
    /// Emit structured logs to stderr using the given profile
    #[arg(long, global = true, value_enum)]
    log: Option<LogProfile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Development,
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Evaluate one calculation: tally calc <A> <B> <OPERATION>
    Calc(commands::calc::CalcArgs),
    /// Read commands from stdin, one per line
    Repl(commands::repl::ReplArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log {
        logging_facility::init(profile.into());
    }

    let result = match cli.command {
        Commands::Calc(args) => commands::calc::execute(args),
        Commands::Repl(args) => commands::repl::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
