// src/output/table.rs

use super::{Output, OutputResult, format};

impl Output {
    /// Prints a padded table: blue header and separator, then rows alternating
    /// white and gray. Each column is as wide as its widest cell plus two spaces.
    pub fn table<T: AsRef<str>, C: AsRef<str>>(
        &mut self,
        titles: &[T],
        rows: &[Vec<C>],
    ) -> OutputResult {
        let mut widths: Vec<usize> = titles.iter().map(|t| visible_width(t.as_ref())).collect();
        for row in rows {
            for (column, cell) in row.iter().enumerate() {
                let width = visible_width(cell.as_ref());
                match widths.get_mut(column) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }

        let header = render_row(titles.iter().map(AsRef::as_ref), &widths);
        self.write_ln(format_args!("<blue>{}</>", header))?;

        let separator: String = widths
            .iter()
            .map(|width| format!("{}  ", "-".repeat(*width)))
            .collect();
        self.write_ln(format_args!("<blue>{}</>", separator))?;

        for (i, row) in rows.iter().enumerate() {
            let line = render_row(row.iter().map(AsRef::as_ref), &widths);
            // Row numbering starts at 1 below the header.
            let color = if (i + 1) % 2 == 0 { "gray" } else { "white" };
            self.write_ln(format_args!("<{color}>{line}</>"))?;
        }
        Ok(())
    }
}

fn visible_width(cell: &str) -> usize {
    format::strip(cell).chars().count()
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .enumerate()
        .map(|(column, cell)| {
            let width = widths.get(column).copied().unwrap_or_default();
            let padding = width.saturating_sub(visible_width(cell));
            format!("{}{}  ", cell, " ".repeat(padding))
        })
        .collect()
}
