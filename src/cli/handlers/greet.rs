// src/cli/handlers/greet.rs

use anyhow::Result;

use crate::{cli::context::CommandContext, cli::registry::CommandDefinition, constants::SUCCESS};

pub const COMMAND: CommandDefinition = CommandDefinition {
    signature: "greet {name} {--times|-t=1 (int) : How many lines} {--shout=false (bool) : Upper-case the greeting}",
    description: "Greets someone.",
    aliases: &[],
    handler: handle,
};

pub fn handle(ctx: &mut CommandContext<'_>) -> Result<i32> {
    let name = ctx.value("name")?.to_string();
    let times = ctx.value("times")?.as_int().unwrap_or(1).max(0);
    let shout = ctx.value("shout")?.as_bool().unwrap_or_default();

    let mut line = format!(t!("greet.line"), name = name);
    if shout {
        line = line.to_uppercase();
    }
    for _ in 0..times {
        ctx.output().write_ln(format_args!("<green>{}</>", line))?;
    }
    Ok(SUCCESS)
}
