// src/cli/context.rs

use crate::{
    cli::{
        dispatcher::{self, CommanderError},
        help,
        registry::RegisteredCommand,
    },
    core::{ArgumentDeclaration, Arguments, SignatureError, config_loader::CommanderConfig},
    models::ArgValue,
    output::Output,
};
use anyhow::Result;

/// Everything a handler gets for one invocation: its bound arguments, the
/// shared output and a way to call sibling commands.
#[derive(Debug)]
pub struct CommandContext<'a> {
    command: &'a RegisteredCommand,
    args: &'a [String],
    arguments: Arguments,
    output: &'a mut Output,
    commands: &'a [RegisteredCommand],
    config: &'a CommanderConfig,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(
        command: &'a RegisteredCommand,
        args: &'a [String],
        arguments: Arguments,
        output: &'a mut Output,
        commands: &'a [RegisteredCommand],
        config: &'a CommanderConfig,
    ) -> Self {
        Self {
            command,
            args,
            arguments,
            output,
            commands,
            config,
        }
    }

    /// Canonical name of the running command, even when called by alias.
    pub fn name(&self) -> &str {
        self.command.name()
    }

    /// The raw arguments that followed the command name.
    pub fn args(&self) -> &[String] {
        self.args
    }

    /// Declarations bound for this invocation.
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// The bound declaration answering to `name`.
    pub fn arg(&self, name: &str) -> Result<&ArgumentDeclaration, SignatureError> {
        self.arguments.arg(name)
    }

    /// Typed value of a declared argument. Asking for an undeclared name is a
    /// bug in the handler and comes back as `ArgumentNotFound`.
    pub fn value(&self, name: &str) -> Result<ArgValue, SignatureError> {
        self.arguments.value(name)
    }

    pub fn output(&mut self) -> &mut Output {
        self.output
    }

    /// Prints this command's help.
    pub fn help(&mut self) -> Result<()> {
        help::render_command_help(self.output, self.config, self.command)?;
        Ok(())
    }

    /// Runs another registered command with its own freshly bound declarations.
    pub fn call(&mut self, name: &str, args: &[String]) -> Result<i32> {
        dispatcher::invoke(self.commands, self.config, self.output, name, args)
    }

    /// Like [`call`](Self::call), but takes a shell-like command line such as
    /// `greet "Ada Lovelace" --times 2`.
    pub fn call_line(&mut self, line: &str) -> Result<i32> {
        let words =
            shlex::split(line).ok_or_else(|| CommanderError::CommandLine(line.to_string()))?;
        let Some((name, args)) = words.split_first() else {
            return Err(CommanderError::CommandLine(line.to_string()).into());
        };
        self.call(name, args)
    }
}
