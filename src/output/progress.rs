// src/output/progress.rs

use super::{Output, OutputResult};
use crate::constants::PROGRESS_BAR_WIDTH;

/// A single-line progress bar redrawn in place with `\r`.
#[derive(Debug)]
pub struct ProgressBar<'a> {
    output: &'a mut Output,
    total: usize,
    index: usize,
}

impl<'a> ProgressBar<'a> {
    pub fn new(output: &'a mut Output, total: usize) -> Self {
        Self {
            output,
            total,
            index: 0,
        }
    }

    pub fn start(&mut self) {
        self.index = 0;
    }

    /// Advances by one step and redraws the bar.
    pub fn increment(&mut self) -> OutputResult {
        self.index += 1;
        let line = render(self.percent());
        self.output.write(line)
    }

    /// Percentage done, capped at 100. An empty total counts as done.
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 100;
        }
        (self.index.saturating_mul(100) / self.total).min(100)
    }

    /// Erases the bar line.
    pub fn finish(&mut self) -> OutputResult {
        self.output.write("<eraseLine>\r")
    }
}

fn render(percent: usize) -> String {
    let filled = percent / 2;
    format!(
        "\r[{}{}] {}%",
        "▓".repeat(filled),
        "░".repeat(PROGRESS_BAR_WIDTH.saturating_sub(filled)),
        percent
    )
}
