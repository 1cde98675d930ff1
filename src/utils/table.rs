//! Table rendering utilities for CLI outputs.
//! Widths are measured with unicode-width so Cyrillic category titles line up.

use crate::utils::colors::RESET;
use unicode_width::UnicodeWidthStr;

pub struct Cell {
    pub text: String,
    pub color: Option<String>,
}

impl Cell {
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored<S: Into<String>>(text: S, color: &str) -> Self {
        Self {
            text: text.into(),
            color: Some(color.to_string()),
        }
    }
}

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub separator: char,
    pub use_color: bool,
}

impl Table {
    pub fn new<S: AsRef<str>>(headers: &[S], separator: char) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
            separator,
            use_color: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.text.width())
                    .chain(std::iter::once(h.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (h, w) in self.headers.iter().zip(&widths) {
            out.push_str(&pad(h, *w));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = widths.iter().map(|w| w + 1).sum();
        out.push_str(&self.separator.to_string().repeat(total.saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i);
                let text = cell.map(|c| c.text.as_str()).unwrap_or("");
                let padded = pad(text, *w);
                match cell.and_then(|c| c.color.as_deref()) {
                    Some(color) if self.use_color => {
                        out.push_str(&format!("{}{}{}", color, padded, RESET))
                    }
                    _ => out.push_str(&padded),
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}
