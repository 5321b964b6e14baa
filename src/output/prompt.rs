// src/output/prompt.rs

//! Interactive prompts. Each one answers with its default, without writing
//! anything, when the output is not interactive (piped stdin, tests).

use super::{Output, OutputResult};
use dialoguer::{Confirm, Input, MultiSelect, Password, Select, theme::ColorfulTheme};

impl Output {
    /// Asks for a line of text.
    pub fn ask(&mut self, question: &str, default: &str) -> OutputResult<String> {
        if !self.interactive {
            return Ok(default.to_string());
        }
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(answer.trim().to_string())
    }

    /// Asks for a line of text without echoing it.
    pub fn secret(&mut self, question: &str, default: &str) -> OutputResult<String> {
        if !self.interactive {
            return Ok(default.to_string());
        }
        let answer = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .allow_empty_password(true)
            .interact()?;
        Ok(answer.trim().to_string())
    }

    pub fn confirm(&mut self, question: &str, default: bool) -> OutputResult<bool> {
        if !self.interactive {
            return Ok(default);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(default)
            .interact()?)
    }

    /// Picks one option. Returns `None` when the user aborts or, when not
    /// interactive, when `default` is `None` or out of range.
    pub fn choice(
        &mut self,
        text: &str,
        options: &[String],
        default: Option<usize>,
    ) -> OutputResult<Option<String>> {
        if !self.interactive {
            return Ok(default.and_then(|i| options.get(i)).cloned());
        }
        let theme = ColorfulTheme::default();
        let mut select = Select::with_theme(&theme)
            .with_prompt(text)
            .items(options);
        if let Some(index) = default {
            select = select.default(index);
        }
        let picked = select.interact_opt()?;
        Ok(picked.and_then(|i| options.get(i)).cloned())
    }

    /// Picks any number of options, in option order. `selected` holds the
    /// indices checked up front. With `required`, an empty pick asks again.
    pub fn select(
        &mut self,
        text: &str,
        options: &[String],
        selected: &[usize],
        required: bool,
    ) -> OutputResult<Vec<String>> {
        if !self.interactive {
            return Ok(pick(options, selected));
        }
        let theme = ColorfulTheme::default();
        let defaults: Vec<bool> = (0..options.len()).map(|i| selected.contains(&i)).collect();
        loop {
            let picked = MultiSelect::with_theme(&theme)
                .with_prompt(text)
                .items(options)
                .defaults(&defaults)
                .interact()?;
            if required && picked.is_empty() && !options.is_empty() {
                continue;
            }
            return Ok(pick(options, &picked));
        }
    }
}

fn pick(options: &[String], indices: &[usize]) -> Vec<String> {
    options
        .iter()
        .enumerate()
        .filter(|(i, _)| indices.contains(i))
        .map(|(_, option)| option.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::output::Output;

    fn options() -> Vec<String> {
        ["MIT", "Apache-2.0", "GPL-3.0"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_non_interactive_prompts_return_defaults() {
        let (mut output, buffer) = Output::buffered();
        assert_eq!(output.ask("Name?", "demo").unwrap(), "demo");
        assert_eq!(output.secret("Token?", "").unwrap(), "");
        assert!(output.confirm("Sure?", true).unwrap());
        assert_eq!(buffer.take(), "");
    }

    #[test]
    fn test_non_interactive_choice() {
        let (mut output, _buffer) = Output::buffered();
        assert_eq!(
            output.choice("License", &options(), Some(1)).unwrap(),
            Some("Apache-2.0".to_string())
        );
        assert_eq!(output.choice("License", &options(), None).unwrap(), None);
        assert_eq!(output.choice("License", &options(), Some(9)).unwrap(), None);
    }

    #[test]
    fn test_non_interactive_select_keeps_option_order() {
        let (mut output, _buffer) = Output::buffered();
        assert_eq!(
            output.select("Pick", &options(), &[2, 0], true).unwrap(),
            vec!["MIT".to_string(), "GPL-3.0".to_string()]
        );
        assert!(output.select("Pick", &options(), &[], false).unwrap().is_empty());
    }
}
