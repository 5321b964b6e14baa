// src/core/config_loader.rs

//! # Config Loader
//!
//! Loads the optional `CommanderConfig` TOML file. Every field has a default,
//! so an empty file (or no file at all) yields the stock behaviour.

use crate::constants::CONFIG_ENV_VAR;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse commander config: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Presentation settings for a `Commander`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CommanderConfig {
    /// Forces ANSI styling on or off. `None` follows the terminal.
    pub ansi: Option<bool>,
    pub help: HelpConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HelpConfig {
    /// Heading printed above the command list.
    pub title: String,
    /// Template for per-command help. Supports `{desc}`, `{name}` and `{options}`.
    pub command_template: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            title: t!("commander.help.title").to_string(),
            command_template: t!("command.help.template").to_string(),
        }
    }
}

impl CommanderConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading commander config from '{}'", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads the file named by `CMDSIG_CONFIG`, or returns the defaults when the
    /// variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CommanderConfig::from_toml_str("").unwrap();
        assert_eq!(config, CommanderConfig::default());
        assert_eq!(config.ansi, None);
        assert_eq!(config.help.title, "Available commands:");
        assert!(config.help.command_template.contains("{options}"));
    }

    #[test]
    fn test_partial_help_override() {
        let config = CommanderConfig::from_toml_str(
            r#"
            ansi = false

            [help]
            title = "Commands"
            "#,
        )
        .unwrap();
        assert_eq!(config.ansi, Some(false));
        assert_eq!(config.help.title, "Commands");
        assert_eq!(
            config.help.command_template,
            HelpConfig::default().command_template
        );
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let result = CommanderConfig::from_toml_str("ansi = \"maybe\"");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[help]\ncommand_template = \"{name}: {desc}\"\n")
            .unwrap();
        file.flush().unwrap();

        let config = CommanderConfig::load(file.path()).unwrap();
        assert_eq!(config.help.command_template, "{name}: {desc}");
    }

    #[test]
    fn test_load_missing_file() {
        let result = CommanderConfig::load(Path::new("no_such_cmdsig_config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
