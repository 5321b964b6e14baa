// src/cli/dispatcher.rs

use anyhow::Result;
use thiserror::Error;

use crate::{
    cli::{
        context::CommandContext,
        help,
        registry::{CommandDefinition, RegisteredCommand, find_command},
    },
    constants::{ERROR, HELP_TOKENS, SUCCESS},
    core::{SignatureError, config_loader::CommanderConfig},
    output::{Output, OutputError},
};

/// Failures of the commander itself, as opposed to invalid user input.
#[derive(Error, Debug)]
pub enum CommanderError {
    #[error("Invalid signature for command '{command}': {source}")]
    Signature {
        command: String,
        #[source]
        source: SignatureError,
    },
    #[error("Command '{0}' is registered more than once.")]
    DuplicateCommand(String),
    #[error("Command line could not be parsed: {0}")]
    CommandLine(String),
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Owns the registered commands and the output, and routes process arguments
/// to the matching handler.
#[derive(Debug)]
pub struct Commander {
    commands: Vec<RegisteredCommand>,
    output: Output,
    config: CommanderConfig,
}

impl Commander {
    /// A commander with the default (translated) help texts.
    pub fn new(output: Output) -> Self {
        Self::with_config(output, CommanderConfig::default())
    }

    /// Applies `config.ansi` to `output` when set.
    pub fn with_config(mut output: Output, config: CommanderConfig) -> Self {
        if let Some(ansi) = config.ansi {
            output.set_ansi(ansi);
        }
        Self {
            commands: Vec::new(),
            output,
            config,
        }
    }

    /// Registers a command, parsing its signature right away.
    ///
    /// # Errors
    /// A malformed signature or a name/alias that is already taken aborts registration.
    pub fn register(&mut self, definition: CommandDefinition) -> Result<(), CommanderError> {
        let command = RegisteredCommand::new(definition).map_err(|source| {
            CommanderError::Signature {
                command: crate::core::parse_name(definition.signature),
                source,
            }
        })?;

        let taken = std::iter::once(command.name())
            .chain(definition.aliases.iter().copied())
            .find(|name| find_command(&self.commands, name).is_some());
        if let Some(name) = taken {
            return Err(CommanderError::DuplicateCommand(name.to_string()));
        }

        log::debug!("Registered command '{}'", command.name());
        self.commands.push(command);
        Ok(())
    }

    /// Registers in order, stopping at the first failure.
    pub fn register_all(&mut self, definitions: &[CommandDefinition]) -> Result<(), CommanderError> {
        for definition in definitions {
            self.register(*definition)?;
        }
        Ok(())
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> &[RegisteredCommand] {
        &self.commands
    }

    pub fn output(&mut self) -> &mut Output {
        &mut self.output
    }

    /// Runs the command named by `argv[0]` with the rest of `argv`.
    ///
    /// # Logic:
    /// - No arguments, or a help token first: list the commands.
    /// - Otherwise, dispatch through [`invoke`].
    ///
    /// Returns the exit status. Handler failures are returned as errors.
    pub fn run(&mut self, argv: &[String]) -> Result<i32> {
        log::debug!("Dispatching args: {:?}", argv);

        let Some((name, args)) = argv.split_first() else {
            help::render_commands_help(&mut self.output, &self.config, &self.commands)?;
            return Ok(SUCCESS);
        };
        if HELP_TOKENS.contains(&name.as_str()) {
            help::render_commands_help(&mut self.output, &self.config, &self.commands)?;
            return Ok(SUCCESS);
        }

        invoke(&self.commands, &self.config, &mut self.output, name, args)
    }

    /// Runs one command by name, e.g. from application code rather than `argv`.
    pub fn call(&mut self, name: &str, args: &[String]) -> Result<i32> {
        invoke(&self.commands, &self.config, &mut self.output, name, args)
    }
}

/// Resolves `name`, binds a fresh copy of its declarations against `args`,
/// validates them and calls the handler.
///
/// Unknown commands and missing required arguments are reported on `output`
/// and yield `ERROR`; a help token as first argument prints the command help.
pub(crate) fn invoke(
    commands: &[RegisteredCommand],
    config: &CommanderConfig,
    output: &mut Output,
    name: &str,
    args: &[String],
) -> Result<i32> {
    let Some(command) = find_command(commands, name) else {
        log::warn!("Command '{}' not found", name);
        output.error(format!(t!("commander.error.not_found"), name = name))?;
        return Ok(ERROR);
    };

    if args.first().is_some_and(|first| HELP_TOKENS.contains(&first.as_str())) {
        help::render_command_help(output, config, command)?;
        return Ok(SUCCESS);
    }

    let arguments = command.arguments().bound(args);
    if !arguments.is_valid() {
        let message = arguments.first_error_message();
        log::debug!("Command '{}' rejected: {}", command.name(), message);
        output.error(format!(
            t!("commander.error.invalid"),
            name = command.name(),
            message = message
        ))?;
        return Ok(ERROR);
    }

    let mut context = CommandContext::new(command, args, arguments, output, commands, config);
    (command.definition().handler)(&mut context)
}
