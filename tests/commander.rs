use anyhow::Result;
use cmdsig::{
    cli::{CommandContext, CommandDefinition, Commander, handlers},
    constants::{ERROR, SUCCESS},
    output::{Output, OutputBuffer},
};

fn show_prefix(ctx: &mut CommandContext<'_>) -> Result<i32> {
    let prefix = ctx.value("prefix")?;
    ctx.output().write(format_args!("{prefix}_{prefix}"))?;
    Ok(SUCCESS)
}

fn notify(ctx: &mut CommandContext<'_>) -> Result<i32> {
    if !ctx.value("silent")?.as_bool().unwrap_or_default() {
        ctx.output().write_ln("notified")?;
    }
    Ok(SUCCESS)
}

const SHOW_TIME: CommandDefinition = CommandDefinition {
    signature: "show:time {prefix}",
    description: "The function shows the current time.",
    aliases: &[],
    handler: show_prefix,
};

// `-silent` has no default, so it must be passed.
const NOTIFY: CommandDefinition = CommandDefinition {
    signature: "notify {-silent|-S (bool) : No log message}",
    description: "Requires its flag",
    aliases: &[],
    handler: notify,
};

fn commander(definitions: &[CommandDefinition]) -> (Commander, OutputBuffer) {
    let (output, buffer) = Output::buffered();
    let mut commander = Commander::new(output);
    commander.register_all(definitions).unwrap();
    (commander, buffer)
}

fn argv(params: &[&str]) -> Vec<String> {
    params.iter().map(|s| s.to_string()).collect()
}

#[test]
fn commander_help_lists_commands() {
    let (mut commander, buffer) = commander(&[SHOW_TIME]);
    assert_eq!(commander.run(&argv(&["help"])).unwrap(), SUCCESS);
    assert_eq!(
        buffer.take(),
        "Available commands:\n show:time: The function shows the current time.\n"
    );
}

#[test]
fn command_help_renders_template() {
    let (mut commander, buffer) = commander(&[SHOW_TIME]);
    assert_eq!(commander.run(&argv(&["show:time", "help"])).unwrap(), SUCCESS);
    assert_eq!(
        buffer.take(),
        "Description:\n The function shows the current time.\n\nUsage:\n show:time [options]\n\nOptions:\n prefix\n"
    );
}

#[test]
fn missing_positional_is_reported() {
    let (mut commander, buffer) = commander(&[SHOW_TIME]);
    assert_eq!(commander.run(&argv(&["show:time"])).unwrap(), ERROR);
    assert_eq!(
        buffer.take(),
        " ERROR  Get error for command 'show:time': prefix - is required\n"
    );
}

#[test]
fn positional_value_reaches_handler() {
    let (mut commander, buffer) = commander(&[SHOW_TIME]);
    assert_eq!(commander.run(&argv(&["show:time", "A"])).unwrap(), SUCCESS);
    assert_eq!(buffer.take(), "A_A");
}

#[test]
fn missing_required_flag_lists_all_names() {
    let (mut commander, buffer) = commander(&[NOTIFY]);
    assert_eq!(commander.run(&argv(&["notify"])).unwrap(), ERROR);
    assert_eq!(
        buffer.take(),
        " ERROR  Get error for command 'notify': -silent,-S - is required\n"
    );

    assert_eq!(commander.run(&argv(&["notify", "-S"])).unwrap(), SUCCESS);
    assert_eq!(buffer.take(), "");
}

#[test]
fn each_run_binds_fresh_arguments() {
    let (mut commander, buffer) = commander(&[NOTIFY]);
    assert_eq!(commander.run(&argv(&["notify", "-silent=false"])).unwrap(), SUCCESS);
    assert_eq!(buffer.take(), "notified\n");

    // The previous binding must not leak into this run.
    assert_eq!(commander.run(&argv(&["notify"])).unwrap(), ERROR);
    buffer.clear();
}

#[test]
fn send_mail_demo_command() {
    let (mut commander, buffer) = commander(handlers::COMMANDS);
    let status = commander
        .run(&argv(&[
            "send:mail", "ada@example.com", "--count", "3", "--id=7", "-id", "9",
        ]))
        .unwrap();
    assert_eq!(status, SUCCESS);
    assert_eq!(
        buffer.take(),
        " INFO  Sending 3 mail(s) to ada@example.com\n INFO  User ids: 7, 9\nEmail sent\n"
    );
}

#[test]
fn send_mail_silent_by_alias() {
    let (mut commander, buffer) = commander(handlers::COMMANDS);
    let status = commander
        .run(&argv(&["mail", "ada@example.com", "-S"]))
        .unwrap();
    assert_eq!(status, SUCCESS);
    assert_eq!(buffer.take(), "Email sent\n");
}

#[test]
fn greet_repeats_and_shouts() {
    let (mut commander, buffer) = commander(handlers::COMMANDS);
    let status = commander
        .run(&argv(&["greet", "Ada", "-t=2", "--shout"]))
        .unwrap();
    assert_eq!(status, SUCCESS);
    assert_eq!(buffer.take(), "HELLO, ADA!\nHELLO, ADA!\n");
}

#[test]
fn setup_answers_defaults_without_terminal() {
    let (mut commander, buffer) = commander(handlers::COMMANDS);
    let status = commander
        .run(&argv(&["setup", "--name", "demo-app", "--greet"]))
        .unwrap();
    assert_eq!(status, SUCCESS);

    let text = buffer.take();
    assert!(text.starts_with(" INFO  Configured demo-app (MIT)\n"));
    assert!(text.contains("logging  yes"));
    assert!(text.contains("tests    no"));
    assert!(text.ends_with("Hello, demo-app!\n"));
}

#[test]
fn report_prints_table() {
    let (mut commander, buffer) = commander(handlers::COMMANDS);
    let status = commander
        .run(&argv(&["report", "-i", "alpha", "-i", "be"]))
        .unwrap();
    assert_eq!(status, SUCCESS);

    let text = buffer.take();
    assert!(text.starts_with(" INFO  Processing 2 item(s)\n"));
    assert!(text.contains("100%"));
    assert!(text.contains("1  alpha  5"));
    assert!(text.ends_with("Report ready\n"));
}

#[test]
fn report_rejects_delay_out_of_range() {
    let (mut commander, buffer) = commander(handlers::COMMANDS);
    let status = commander
        .run(&argv(&["report", "-i", "a", "--delay", "1e400"]))
        .unwrap();
    assert_eq!(status, ERROR);
    assert_eq!(buffer.take(), " ERROR  Delay of inf seconds is out of range\n");

    let status = commander
        .run(&argv(&["report", "-i", "a", "--delay=1e20"]))
        .unwrap();
    assert_eq!(status, ERROR);
    assert!(buffer.take().contains("is out of range"));
}
