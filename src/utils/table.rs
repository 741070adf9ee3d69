//! Table rendering for CLI output. Widths are measured in visible columns,
//! so styled cells and wide characters line up.

use super::formatting::{bold, pad_right, visible_width};

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row; missing trailing cells render empty.
    pub fn add_row(&mut self, row: Vec<String>) {
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
                    .flat_map(|cell| cell.lines().map(visible_width).collect::<Vec<_>>())
                    .chain(std::iter::once(visible_width(h)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad_right(&bold(h), *w))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&sep.join("  "));
        out.push('\n');

        // Rows; multi-line cells expand into several physical lines
        for row in &self.rows {
            let cells: Vec<Vec<&str>> = (0..widths.len())
                .map(|i| {
                    row.get(i)
                        .map(|c| c.lines().collect::<Vec<_>>())
                        .unwrap_or_default()
                })
                .collect();
            let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);

            for line in 0..height {
                let parts: Vec<String> = cells
                    .iter()
                    .zip(&widths)
                    .map(|(c, w)| pad_right(c.get(line).copied().unwrap_or(""), *w))
                    .collect();
                out.push_str(parts.join("  ").trim_end());
                out.push('\n');
            }
        }

        out
    }
}
