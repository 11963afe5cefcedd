//! Plain-text table rendering for list and dashboard views.

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Configuration for a single column in the rendered table.
#[derive(Clone, Debug)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            min_width: 0,
            alignment,
        }
    }
}

/// A table with column metadata and rows of already-formatted cells.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Content width for each column: the widest of header, rows, and the
    /// configured minimum.
    fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = column.header.chars().count().max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(cell.chars().count());
                    }
                }
                width
            })
            .collect()
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                pad_cell(text, widths[idx], column.alignment)
            })
            .collect();
        cells.join("  ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let mut out = String::new();

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        out.push_str(&self.render_row(&headers, &widths));
        out.push('\n');
        out.push_str(&horizontal_rule(&widths));

        for row in &self.rows {
            out.push('\n');
            out.push_str(&self.render_row(row, &widths));
        }

        out
    }
}

fn pad_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let length = text.chars().count();
    let remaining = width.saturating_sub(length);
    match alignment {
        Alignment::Left => format!("{}{}", text, " ".repeat(remaining)),
        Alignment::Right => format!("{}{}", " ".repeat(remaining), text),
    }
}

fn horizontal_rule(widths: &[usize]) -> String {
    let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2;
    "-".repeat(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_expand_to_widest_cell_and_respect_alignment() {
        let mut table = Table::new(vec![
            TableColumn::new("Name", Alignment::Left),
            TableColumn::new("Amount", Alignment::Right),
        ]);
        table.push_row(vec!["Vercel".into(), "20.00".into()]);
        table.push_row(vec!["ConvertKit".into(), "29.00".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name        Amount");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "Vercel       20.00");
        assert_eq!(lines[3], "ConvertKit   29.00");
    }

    #[test]
    fn missing_cells_render_empty() {
        let mut table = Table::new(vec![
            TableColumn::new("A", Alignment::Left),
            TableColumn::new("B", Alignment::Left),
        ]);
        table.push_row(vec!["only".into()]);
        let rendered = table.render();
        assert!(rendered.lines().last().unwrap().starts_with("only"));
    }
}
