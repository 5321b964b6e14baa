// src/cli/handlers/mod.rs

// The demo commands shipped with the `cmdsig` binary. Each module exposes a
// `COMMAND` definition and its `handle` function.

use crate::cli::registry::CommandDefinition;

pub mod greet;
pub mod report;
pub mod send_mail;
pub mod setup;
pub mod show_time;

/// Every demo command, in help order.
pub static COMMANDS: &[CommandDefinition] = &[
    send_mail::COMMAND,
    show_time::COMMAND,
    greet::COMMAND,
    report::COMMAND,
    setup::COMMAND,
];
