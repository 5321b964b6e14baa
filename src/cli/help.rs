// src/cli/help.rs

use crate::{
    cli::registry::RegisteredCommand,
    core::{Arguments, config_loader::CommanderConfig},
    output::{Output, OutputResult},
};

/// Prints the list of registered commands with their descriptions.
pub fn render_commands_help(
    output: &mut Output,
    config: &CommanderConfig,
    commands: &[RegisteredCommand],
) -> OutputResult {
    output.write_ln(format_args!("<yellow>{}</>", config.help.title))?;
    for command in commands {
        output.write_ln(format_args!(
            " <green>{}</>: {}",
            command.name(),
            command.definition().description
        ))?;
    }
    Ok(())
}

/// Prints one command's help through the configured template.
pub fn render_command_help(
    output: &mut Output,
    config: &CommanderConfig,
    command: &RegisteredCommand,
) -> OutputResult {
    let text = config
        .help
        .command_template
        .replace("{desc}", command.definition().description)
        .replace("{name}", command.name())
        .replace("{options}", &options_block(command.arguments()));
    output.write_ln(text)
}

/// One line per declaration. Names are padded to a shared column only when a
/// description follows them.
pub fn options_block(arguments: &Arguments) -> String {
    let entries: Vec<(String, &str)> = arguments
        .declarations()
        .iter()
        .map(|declaration| (declaration.display_names(), declaration.description()))
        .collect();

    let width = entries
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or_default()
        + 2;

    entries
        .iter()
        .map(|(name, description)| {
            if description.is_empty() {
                format!(" <green>{}</>", name)
            } else {
                format!(" <green>{:<width$}</>{}", name, description, width = width)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
