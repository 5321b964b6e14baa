// src/cli/handlers/send_mail.rs

use anyhow::Result;

use crate::{cli::context::CommandContext, cli::registry::CommandDefinition, constants::SUCCESS};

pub const COMMAND: CommandDefinition = CommandDefinition {
    signature: "send:mail {email : Recipient address} {--count=1 (int) : Count of mails} {--id=[] : User ids} {-silent|-S=false (bool) : No log message}",
    description: "Command to send email",
    aliases: &["mail"],
    handler: handle,
};

/// The main handler for the `send:mail` command.
pub fn handle(ctx: &mut CommandContext<'_>) -> Result<i32> {
    let email = ctx.value("email")?;
    let count = ctx.value("count")?.as_int().unwrap_or_default();
    let ids = ctx.value("id")?;
    let silent = ctx.value("silent")?.as_bool().unwrap_or_default();

    let out = ctx.output();
    if !silent {
        out.info(format!(t!("send_mail.sending"), count = count, email = email))?;
        if let Some(ids) = ids.as_list().filter(|ids| !ids.is_empty()) {
            let joined: Vec<String> = ids.iter().map(ToString::to_string).collect();
            out.info(format!(t!("send_mail.ids"), ids = joined.join(", ")))?;
        }
    }
    out.write_ln(t!("send_mail.sent"))?;
    Ok(SUCCESS)
}
