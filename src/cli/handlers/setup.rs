// src/cli/handlers/setup.rs

use anyhow::Result;

use crate::{cli::context::CommandContext, cli::registry::CommandDefinition, constants::SUCCESS};

pub const COMMAND: CommandDefinition = CommandDefinition {
    signature: "setup {--name=demo : Default project name} {--greet=false (bool) : Run greet afterwards}",
    description: "Walks through a few prompts; answers with defaults when not on a terminal.",
    aliases: &["init"],
    handler: handle,
};

const LICENSES: &[&str] = &["MIT", "Apache-2.0", "GPL-3.0"];
const FEATURES: &[&str] = &["logging", "config", "tests"];

/// The main handler for the `setup` command.
pub fn handle(ctx: &mut CommandContext<'_>) -> Result<i32> {
    let default_name = ctx.value("name")?.to_string();
    let greet = ctx.value("greet")?.as_bool().unwrap_or_default();

    let licenses: Vec<String> = LICENSES.iter().map(|s| s.to_string()).collect();
    let features: Vec<String> = FEATURES.iter().map(|s| s.to_string()).collect();

    let out = ctx.output();
    let name = out.ask(t!("setup.ask.name"), &default_name)?;
    let token = out.secret(t!("setup.ask.token"), "")?;
    let license = out
        .choice(t!("setup.choice.license"), &licenses, Some(0))?
        .unwrap_or_default();
    let enabled = out.select(t!("setup.select.features"), &features, &[0], false)?;

    out.info(format!(t!("setup.summary"), name = name, license = license))?;
    let rows: Vec<Vec<String>> = features
        .iter()
        .map(|feature| {
            let on = if enabled.contains(feature) { "yes" } else { "no" };
            vec![feature.clone(), on.to_string()]
        })
        .collect();
    out.table(&["Feature", "Enabled"], &rows)?;
    if !token.is_empty() {
        out.write_ln("<f>token stored</>")?;
    }

    if greet {
        return ctx.call("greet", &[name]);
    }
    Ok(SUCCESS)
}
