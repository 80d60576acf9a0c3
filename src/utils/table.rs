/// A simple text-based table generator for terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| h.len()).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row_strings: Vec<String> = row.iter().map(|s| s.to_string()).collect();

        // Update column widths if needed
        for (i, col) in row_strings.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(col.len());
            }
        }

        self.rows.push(row_strings);
    }

    /// Render the table as a formatted string
    pub fn render(&self) -> String {
        let mut output = String::new();

        // Add header
        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        // Add separator
        output.push_str(&self.render_separator());
        output.push('\n');

        // Add rows
        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    /// Render a single row with proper spacing
    fn render_row(&self, row: &[String]) -> String {
        let mut line = String::new();
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                line.push_str(&format!("{:<width$}  ", col, width = self.col_widths[i]));
            }
        }
        line.trim_end().to_string()
    }

    /// Render the separator between header and rows
    fn render_separator(&self) -> String {
        let mut line = String::new();
        for width in &self.col_widths {
            line.push_str(&"-".repeat(*width));
            line.push_str("  ");
        }
        line.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(vec!["Base", "Sale", "Updated"]);
        table.add_row(vec!["512.50", "520.25", "2024-05-01 10:30"]);
        table.add_row(vec!["505.00", "512.00", "2024-04-30 10:30"]);

        let rendered = table.render();
        assert!(rendered.contains("Base"));
        assert!(rendered.contains("Sale"));
        assert!(rendered.contains("512.50"));
        assert!(rendered.contains("2024-04-30 10:30"));
    }
}
