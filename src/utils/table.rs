//! Table rendering utilities for CLI outputs.

use crate::utils::colors::RESET;
use crate::utils::formatting::{pad_right, truncate};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Upper bound for the column width; longer cells are truncated.
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let longest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .max()
                    .unwrap_or(0);
                longest
                    .max(UnicodeWidthStr::width(col.header.as_str()))
                    .min(col.max_width)
            })
            .collect()
    }

    pub fn render(&self, separator: char) -> String {
        self.render_styled(separator, |_, _| "")
    }

    /// Render with a colour prefix chosen per cell (`""` for none).
    /// Padding is computed on the plain text.
    pub fn render_styled<F>(&self, separator: char, style: F) -> String
    where
        F: Fn(usize, &str) -> &'static str,
    {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_right(&truncate(&col.header, *w), *w));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + widths.len();
        out.push_str(&separator.to_string().repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let padded = pad_right(&truncate(cell, *w), *w);
                match style(i, cell) {
                    "" => out.push_str(&padded),
                    color => {
                        out.push_str(color);
                        out.push_str(&padded);
                        out.push_str(RESET);
                    }
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
