// src/cli/handlers/report.rs

use anyhow::Result;
use std::{thread, time::Duration};

use crate::{
    cli::context::CommandContext,
    cli::registry::CommandDefinition,
    constants::{ERROR, SUCCESS},
    models::ArgValue,
};

pub const COMMAND: CommandDefinition = CommandDefinition {
    signature: "report {--item|-i=[] : Item to include, repeatable} {--delay=0 (float) : Seconds to wait per item}",
    description: "Measures items and prints them as a table.",
    aliases: &[],
    handler: handle,
};

pub fn handle(ctx: &mut CommandContext<'_>) -> Result<i32> {
    let items: Vec<String> = ctx
        .value("item")?
        .as_list()
        .unwrap_or_default()
        .iter()
        .map(ArgValue::to_string)
        .collect();
    let delay = ctx.value("delay")?.as_float().unwrap_or_default().max(0.0);

    let out = ctx.output();
    let Ok(pause) = Duration::try_from_secs_f64(delay) else {
        out.error(format!(t!("report.bad_delay"), delay = delay))?;
        return Ok(ERROR);
    };
    out.info(format!(t!("report.title"), total = items.len()))?;

    let mut bar = out.create_progress_bar(items.len());
    bar.start();
    let mut rows = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        if !pause.is_zero() {
            thread::sleep(pause);
        }
        rows.push(vec![
            (i + 1).to_string(),
            item.clone(),
            item.chars().count().to_string(),
        ]);
        bar.increment()?;
    }
    bar.finish()?;

    out.table(&["#", "Item", "Length"], &rows)?;
    out.write_ln(t!("report.done"))?;
    Ok(SUCCESS)
}
