//! Fixed-width bordered console tables
//!
//! ```text
//! +--------------------------------------------------------------------------------------------------+
//! |                                          Title                                                   |
//! +--------------------------------------------------------------------------------------------------+
//! |     Column 1     |     Column 2     |
//! +--------------------------------------------------------------------------------------------------+
//! |      value       |      value       |
//! ```

use std::fmt::Write;

pub const TABLE_WIDTH: usize = 100;

#[derive(Debug, Clone)]
pub struct Table {
    title: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(title: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            title: title.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let border = border();
        let mut out = String::new();

        let _ = writeln!(out, "{border}");
        let _ = writeln!(out, "|{:^width$}|", self.title, width = TABLE_WIDTH - 2);
        let _ = writeln!(out, "{border}");
        let _ = writeln!(out, "{}", row_line(&self.columns));
        let _ = writeln!(out, "{border}");
        for row in &self.rows {
            let _ = writeln!(out, "{}", row_line(row));
        }
        if !self.rows.is_empty() {
            let _ = writeln!(out, "{border}");
        }
        out
    }
}

fn border() -> String {
    format!("+{}+", "-".repeat(TABLE_WIDTH - 2))
}

/// Cells share the width evenly; a value wider than its cell is printed whole
fn row_line(cells: &[String]) -> String {
    if cells.is_empty() {
        return "|".to_string();
    }
    let width = TABLE_WIDTH / cells.len() - 1;
    let mut line = String::from("|");
    for cell in cells {
        let _ = write!(line, "{cell:^width$}|");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_and_title_span_full_width() {
        let rendered = Table::new("BWL Sunder Statistics", &["A", "B"]).render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].len(), TABLE_WIDTH);
        assert!(lines[0].starts_with("+-") && lines[0].ends_with("-+"));
        assert_eq!(lines[1].len(), TABLE_WIDTH);
        assert_eq!(lines[1].trim_matches('|').trim(), "BWL Sunder Statistics");
    }

    #[test]
    fn test_cells_are_centred() {
        let line = row_line(&["ab".to_string(), "c".to_string()]);
        // 100 / 2 - 1 = 49 chars per cell
        let cells: Vec<&str> = line.trim_matches('|').split('|').collect();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].len(), 49);
        assert_eq!(cells[0], format!("{}ab{}", " ".repeat(23), " ".repeat(24)));
        assert_eq!(cells[1].trim(), "c");
    }

    #[test]
    fn test_overlong_cell_is_not_truncated() {
        let long = "x".repeat(40);
        let line = row_line(&[long.clone(), "a".into(), "b".into(), "c".into()]);
        assert!(line.contains(&long));
    }

    #[test]
    fn test_rows_are_closed_by_border() {
        let mut table = Table::new("T", &["Player", "Count"]);
        table.push_row(vec!["Zizek".into(), "7".into()]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[5].contains("Zizek"));
        assert_eq!(lines[6], border());
    }
}
