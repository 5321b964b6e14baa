// src/cli/registry.rs

use crate::{
    cli::context::CommandContext,
    core::{Arguments, SignatureError, parse_name},
};
use anyhow::Result;

/// The handler every command implements. The returned value is the process
/// exit status (`SUCCESS` / `ERROR`).
pub type CommandHandler = fn(&mut CommandContext<'_>) -> Result<i32>;

/// Declares a command: its signature, help text, extra lookup names and handler.
#[derive(Debug, Clone, Copy)]
pub struct CommandDefinition {
    /// e.g. `"send:mail {email} {--count=1 (int) : Count of mails}"`.
    pub signature: &'static str,
    pub description: &'static str,
    pub aliases: &'static [&'static str],
    pub handler: CommandHandler,
}

/// A definition whose signature was parsed at registration time.
#[derive(Debug, Clone)]
pub struct RegisteredCommand {
    name: String,
    definition: CommandDefinition,
    arguments: Arguments,
}

impl RegisteredCommand {
    /// Parses the definition's signature, so a bad `(kind)` hint fails here
    /// rather than on first use.
    pub fn new(definition: CommandDefinition) -> Result<Self, SignatureError> {
        Ok(Self {
            name: parse_name(definition.signature),
            arguments: Arguments::parse(definition.signature)?,
            definition,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &CommandDefinition {
        &self.definition
    }

    /// The pristine (unbound) declarations.
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.definition.aliases.contains(&name)
    }
}

/// Finds a command by its name or one of its aliases.
pub fn find_command<'a>(commands: &'a [RegisteredCommand], name: &str) -> Option<&'a RegisteredCommand> {
    commands.iter().find(|cmd| cmd.answers_to(name))
}
