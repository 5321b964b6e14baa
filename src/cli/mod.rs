// src/cli/mod.rs

//! Command registration, dispatch and help rendering on top of the signature core.

use clap::Parser;

pub mod context;
pub mod dispatcher;
pub mod handlers;
pub mod help;
pub mod registry;

pub use context::CommandContext;
pub use dispatcher::{Commander, CommanderError};
pub use registry::{CommandDefinition, CommandHandler, RegisteredCommand};

/// cmdsig: a demo application built on signature-declared commands.
///
/// Everything after the binary name is handed to the `Commander` untouched,
/// so help flags and command flags are resolved by the signatures, not by clap.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_help_subcommand = true)]
pub struct Cli {
    /// The command name followed by its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
