// src/constants.rs

//! Shared constants for the signature language, the dispatcher and the binary.

/// Exit status returned by a command that completed normally.
pub const SUCCESS: i32 = 0;

/// Exit status returned when a command is unknown, invalid or failed.
pub const ERROR: i32 = 1;

/// Tokens that ask for help when they are the first (commander help) or
/// second (command help) argument.
pub const HELP_TOKENS: &[&str] = &["help", "-h", "--help"];

/// Default-value marker that turns a declaration into an array accumulator.
pub const ARRAY_MARKER: &str = "[]";

/// Environment variable holding the path of a `CommanderConfig` TOML file.
pub const CONFIG_ENV_VAR: &str = "CMDSIG_CONFIG";

/// Width, in cells, of a rendered progress bar.
pub const PROGRESS_BAR_WIDTH: usize = 50;
