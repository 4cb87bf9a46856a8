//! The table sub-state (component I).
//!
//! Buffers header, separator, and data rows; computes column widths
//! and alignment on finalize; emits the table only then. The one
//! place the core departs from pure streaming.

use inkline_core::Alignment;
use unicode_width::UnicodeWidthStr;

/// Split a table row into trimmed cells: trim the row, strip one
/// leading and one trailing `|`, split on the rest.
pub fn split_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('|').unwrap_or(trimmed);
    trimmed.split('|').map(|cell| cell.trim().to_string()).collect()
}

fn parse_alignment(cell: &str) -> Alignment {
    let cell = cell.trim();
    let left = cell.starts_with(':');
    let right = cell.ends_with(':');
    match (left, right) {
        (true, true) => Alignment::Center,
        (false, true) => Alignment::Right,
        _ => Alignment::Left,
    }
}

fn pad(cell: &str, width: usize, alignment: Alignment) -> String {
    let len = UnicodeWidthStr::width(cell);
    let fill = width.saturating_sub(len);
    match alignment {
        Alignment::Left => format!("{}{}", cell, " ".repeat(fill)),
        Alignment::Right => format!("{}{}", " ".repeat(fill), cell),
        Alignment::Center => {
            let left_fill = fill / 2;
            let right_fill = fill - left_fill;
            format!("{}{}{}", " ".repeat(left_fill), cell, " ".repeat(right_fill))
        }
    }
}

fn dashes(width: usize, alignment: Alignment) -> String {
    match alignment {
        Alignment::Left => "-".repeat(width),
        Alignment::Right => format!("{}:", "-".repeat(width.saturating_sub(1))),
        Alignment::Center => {
            if width < 2 {
                "-".repeat(width)
            } else {
                format!(":{}:", "-".repeat(width - 2))
            }
        }
    }
}

/// The table's buffered state between the triggering separator line
/// and finalization.
pub struct TableState {
    header: Vec<String>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<String>>,
}

impl TableState {
    /// Begin a table: `header_line` is the just-flushed paragraph
    /// buffer, `separator_line` is the line that triggered entry into
    /// `Table`.
    pub fn new(header_line: &str, separator_line: &str) -> Self {
        let header = split_cells(header_line);
        let mut separator_cells = split_cells(separator_line);
        while separator_cells.len() < header.len() {
            separator_cells.push("---".to_string());
        }
        let alignments = separator_cells.iter().map(|c| parse_alignment(c)).collect();
        Self { header, alignments, rows: Vec::new() }
    }

    /// Add a data row, truncating any cells beyond the header's column
    /// count (Open Question decision, SPEC_FULL §4.I/§9).
    pub fn push_row(&mut self, line: &str) {
        let mut cells = split_cells(line);
        cells.truncate(self.header.len());
        self.rows.push(cells);
    }

    fn column_widths(&self) -> Vec<usize> {
        (0..self.header.len())
            .map(|i| {
                let header_width = UnicodeWidthStr::width(self.header[i].as_str());
                let data_width = self
                    .rows
                    .iter()
                    .map(|row| row.get(i).map(|c| UnicodeWidthStr::width(c.as_str())).unwrap_or(0))
                    .max()
                    .unwrap_or(0);
                header_width.max(data_width).max(3)
            })
            .collect()
    }

    fn render_row(&self, cells: &[String], widths: &[usize]) -> String {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                pad(cell, width, self.alignments[i])
            })
            .collect();
        format!("| {} |", padded.join(" | "))
    }

    fn render_separator(&self, widths: &[usize]) -> String {
        let parts: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &width)| dashes(width, self.alignments[i]))
            .collect();
        format!("| {} |", parts.join(" | "))
    }

    /// Run the layout algorithm and return the rendered lines (no
    /// trailing newline on any of them). Returns a single placeholder
    /// line if the alignment count doesn't match the header's column
    /// count (SPEC_FULL §4.J: malformed table layout).
    pub fn render(&self) -> Vec<String> {
        if self.alignments.len() != self.header.len() {
            return vec!["[Table Render Error]".to_string()];
        }

        let widths = self.column_widths();
        let mut lines = Vec::with_capacity(2 + self.rows.len());
        lines.push(self.render_row(&self.header, &widths));
        lines.push(self.render_separator(&widths));
        for row in &self.rows {
            lines.push(self.render_row(row, &widths));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_cells_strips_pipes_and_trims() {
        assert_eq!(
            split_cells("| Header 1 | Header 2 |"),
            vec!["Header 1".to_string(), "Header 2".to_string()]
        );
    }

    #[test]
    fn split_cells_without_leading_trailing_pipes() {
        assert_eq!(
            split_cells("a | b"),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn alignment_from_separator_markers() {
        assert_eq!(parse_alignment(":---:"), Alignment::Center);
        assert_eq!(parse_alignment("---:"), Alignment::Right);
        assert_eq!(parse_alignment(":---"), Alignment::Left);
        assert_eq!(parse_alignment("---"), Alignment::Left);
    }

    #[test]
    fn simple_gfm_table_layout() {
        let mut table = TableState::new("Header 1 | Header 2", "-------- | --------");
        table.push_row("Row 1 Cell 1 | Row 1 Cell 2");
        table.push_row("Row 2 Cell 1 | Row 2 Cell 2");

        let lines = table.render();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "| Header 1     | Header 2     |");
        assert_eq!(lines[1], "| ------------ | ------------ |");
        assert_eq!(lines[2], "| Row 1 Cell 1 | Row 1 Cell 2 |");
        assert_eq!(lines[3], "| Row 2 Cell 1 | Row 2 Cell 2 |");
    }

    #[test]
    fn column_width_is_at_least_three() {
        let table = TableState::new("a | b", "- | -");
        assert_eq!(table.column_widths(), vec![3, 3]);
    }

    #[test]
    fn extra_data_cells_are_truncated_to_header_width() {
        let mut table = TableState::new("a | b", "- | -");
        table.push_row("1 | 2 | 3");
        assert_eq!(table.rows[0], vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn short_separator_is_padded_with_default_alignment() {
        let table = TableState::new("a | b | c", ":--:");
        assert_eq!(
            table.alignments,
            vec![Alignment::Center, Alignment::Left, Alignment::Left]
        );
    }

    #[test]
    fn missing_cells_in_a_row_render_empty() {
        let mut table = TableState::new("a | b", "- | -");
        table.push_row("only one");
        let lines = table.render();
        assert_eq!(lines[2], "| only one |     |");
    }
}
