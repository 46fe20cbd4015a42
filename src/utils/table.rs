//! Plain-text table rendering for command output.

/// Column alignment. Amount columns read better right-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with left-aligned columns.
    pub fn new(headers: Vec<&str>) -> Self {
        let aligns = vec![Align::Left; headers.len()];
        Table {
            headers: headers.into_iter().map(String::from).collect(),
            aligns,
            rows: Vec::new(),
        }
    }

    /// Right-align one column (builder style).
    pub fn right_align(mut self, column: usize) -> Self {
        if column < self.aligns.len() {
            self.aligns[column] = Align::Right;
        }
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render the full table with a header separator.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();
        out.push_str(&self.render_row(&self.headers, &widths));
        out.push('\n');
        out.push_str(&self.render_separator(&widths));
        for row in &self.rows {
            out.push('\n');
            out.push_str(&self.render_row(row, &widths));
        }
        out
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }
        widths
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i >= widths.len() {
                break;
            }
            let width = widths[i];
            match self.aligns[i] {
                Align::Left => line.push_str(&format!("{:<width$}", cell, width = width)),
                Align::Right => line.push_str(&format!("{:>width$}", cell, width = width)),
            }
            if i < row.len() - 1 && i < widths.len() - 1 {
                line.push_str(" | ");
            }
        }
        line.trim_end().to_string()
    }

    fn render_separator(&self, widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, &width) in widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}
