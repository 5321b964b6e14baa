// src/cli/handlers/show_time.rs

use anyhow::Result;
use chrono::Local;

use crate::{cli::context::CommandContext, cli::registry::CommandDefinition, constants::SUCCESS};

pub const COMMAND: CommandDefinition = CommandDefinition {
    signature: "show:time {prefix : Text printed before the time} {--seconds|-s=false (bool) : Include seconds}",
    description: "The function shows the current time.",
    aliases: &["time"],
    handler: handle,
};

pub fn handle(ctx: &mut CommandContext<'_>) -> Result<i32> {
    let prefix = ctx.value("prefix")?;
    let pattern = if ctx.value("seconds")?.as_bool().unwrap_or_default() {
        "%Y-%m-%d %H:%M:%S"
    } else {
        "%Y-%m-%d %H:%M"
    };
    let time = Local::now().format(pattern).to_string();

    ctx.output()
        .write_ln(format!(t!("show_time.line"), prefix = prefix, time = time))?;
    Ok(SUCCESS)
}
