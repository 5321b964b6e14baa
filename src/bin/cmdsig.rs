// src/bin/cmdsig.rs

use anyhow::Result;
use clap::Parser;
use cmdsig::{
    cli::{Cli, Commander, handlers},
    core::config_loader::CommanderConfig,
    output::Output,
    t,
};
use colored::*;

/// The main entry point of the `cmdsig` demo application.
/// It sets up logging, loads the optional config, registers the demo commands
/// and hands the raw arguments to the `Commander`.
fn main() {
    env_logger::init();

    match run_cli(Cli::parse()) {
        Ok(status) => std::process::exit(status),
        Err(e) => {
            // Handler failures and bad registrations end up here.
            eprintln!("\n{}: {}", t!("cli.error.label").red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run_cli(cli: Cli) -> Result<i32> {
    log::debug!("CLI args parsed: {:?}", cli);

    let config = CommanderConfig::from_env()?;
    let mut commander = Commander::with_config(Output::stdout(), config);
    commander.register_all(handlers::COMMANDS)?;
    commander.run(&cli.args)
}
