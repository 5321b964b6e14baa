//! Terminal output for commands.
//!
//! Text written through [`Output`] may carry style tags such as `<green>` or
//! `<bgRed>`; they become ANSI escape codes when ansi is on and vanish when it
//! is off. The sink is any `Write`, which lets tests capture everything with
//! [`OutputBuffer`].

pub mod buffer;
pub mod format;
pub mod progress;
pub mod prompt;
pub mod table;

pub use buffer::OutputBuffer;
pub use progress::ProgressBar;

use crate::system::terminal;
use std::{
    fmt::{self, Display},
    io::{self, Write},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Terminal write failed: {0}")]
    Io(#[from] io::Error),
    #[error("User Interface Error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

pub type OutputResult<T = ()> = Result<T, OutputError>;

/// A styled writer shared by the commander and the commands it runs.
pub struct Output {
    writer: Box<dyn Write>,
    ansi: bool,
    interactive: bool,
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("ansi", &self.ansi)
            .field("interactive", &self.interactive)
            .finish_non_exhaustive()
    }
}

impl Output {
    /// Wraps `writer`. `ansi` turns style tags into escape codes; `interactive`
    /// lets prompts wait for input.
    pub fn new(writer: impl Write + 'static, ansi: bool, interactive: bool) -> Self {
        Self {
            writer: Box::new(writer),
            ansi,
            interactive,
        }
    }

    /// Writes to stdout. Styling follows `colored`'s decision (TTY, `NO_COLOR`,
    /// `CLICOLOR_FORCE`); prompts are enabled when stdin is a terminal.
    pub fn stdout() -> Self {
        Self::new(
            io::stdout(),
            colored::control::SHOULD_COLORIZE.should_colorize(),
            terminal::is_interactive_input(),
        )
    }

    /// An output that captures everything into a buffer, with ansi and prompts off.
    pub fn buffered() -> (Self, OutputBuffer) {
        let buffer = OutputBuffer::default();
        (Self::new(buffer.clone(), false, false), buffer)
    }

    /// Forces styling on or off.
    pub fn set_ansi(&mut self, ansi: bool) -> &mut Self {
        self.ansi = ansi;
        self
    }

    /// Whether style tags render as escape codes.
    pub fn ansi(&self) -> bool {
        self.ansi
    }

    /// When off, prompts answer with their defaults.
    pub fn set_interactive(&mut self, interactive: bool) -> &mut Self {
        self.interactive = interactive;
        self
    }

    /// Whether prompts may block for input.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Renders style tags in `text` and writes it as is.
    pub fn write(&mut self, text: impl Display) -> OutputResult {
        let rendered = format::render(&text.to_string(), self.ansi);
        self.writer.write_all(rendered.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Like [`write`](Self::write), followed by a newline.
    pub fn write_ln(&mut self, text: impl Display) -> OutputResult {
        self.write(format_args!("{}\n", text))
    }

    /// A line behind a green ` INFO ` badge.
    pub fn info(&mut self, text: impl Display) -> OutputResult {
        self.write_ln(format_args!("<bgGreen> INFO </> {}</>", text))
    }

    /// A line behind a yellow ` WARN ` badge.
    pub fn warn(&mut self, text: impl Display) -> OutputResult {
        self.write_ln(format_args!("<bgYellow> WARN </> {}</>", text))
    }

    /// A line behind a red ` ERROR ` badge.
    pub fn error(&mut self, text: impl Display) -> OutputResult {
        self.write_ln(format_args!("<bgRed> ERROR </> {}</>", text))
    }

    /// Writes `count` empty lines.
    pub fn new_line(&mut self, count: usize) -> OutputResult {
        self.write("\n".repeat(count))
    }

    /// Clears the screen. Does nothing when ansi is off.
    pub fn clear(&mut self) -> OutputResult {
        if !self.ansi {
            return Ok(());
        }
        let sequence = if cfg!(target_os = "windows") {
            "\x1b[2J\x1b[0f"
        } else {
            "\x1b[2J\x1b[3J\x1b[H"
        };
        self.writer.write_all(sequence.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// An OSC 8 hyperlink, or just `text` when ansi is off.
    pub fn link(&self, url: &str, text: &str) -> String {
        if self.ansi {
            format!("\x1b]8;;{}\x07{}\x1b]8;;\x07", url, text)
        } else {
            text.to_string()
        }
    }

    pub fn create_progress_bar(&mut self, total: usize) -> ProgressBar<'_> {
        ProgressBar::new(self, total)
    }
}
