//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator_char: String,
}

impl Table {
    pub fn new(columns: Vec<Column>, separator_char: &str) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator_char: separator_char.to_string(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        // Separator line under the header
        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        let sep = if self.separator_char.is_empty() {
            "-"
        } else {
            self.separator_char.as_str()
        };
        out.push_str(&sep.repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&format!("{:<width$} ", row[i], width = col.width));
            }
            out.push('\n');
        }

        out
    }
}
