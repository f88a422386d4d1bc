//! Core table types for the labels file

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The decoded labels file: every row, in file order, with no header handling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelTable {
    /// Raw rows; may be ragged and may carry trailing empty cells
    pub rows: Vec<Vec<String>>,
    /// Source file path
    pub source_path: PathBuf,
}

impl LabelTable {
    /// Create a new empty table
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            rows: Vec::new(),
            source_path,
        }
    }

    /// Build a table from in-memory rows (useful for testing)
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            source_path: PathBuf::new(),
        }
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The first row with trailing empty cells removed
    pub fn heading_row(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| trim_trailing_empty(row).to_vec())
            .unwrap_or_default()
    }
}

/// Drop trailing empty cells, keeping interior blanks
///
/// A row made only of empty cells is returned unchanged.
pub fn trim_trailing_empty(row: &[String]) -> &[String] {
    match row.iter().rposition(|cell| !cell.is_empty()) {
        Some(last) => &row[..=last],
        None => row,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_trim_trailing_empty() {
        let row = strings(&["A", "B", "", ""]);
        assert_eq!(trim_trailing_empty(&row), &strings(&["A", "B"])[..]);
    }

    #[test]
    fn test_trim_keeps_interior_blanks() {
        let row = strings(&["A", "", "C", ""]);
        assert_eq!(trim_trailing_empty(&row), &strings(&["A", "", "C"])[..]);
    }

    #[test]
    fn test_trim_all_empty_row_is_unchanged() {
        let row = strings(&["", ""]);
        assert_eq!(trim_trailing_empty(&row).len(), 2);
    }

    #[test]
    fn test_heading_row() {
        let table = LabelTable::from_rows(vec![vec!["A", "B", ""], vec!["1", "0", ""]]);
        assert_eq!(table.heading_row(), strings(&["A", "B"]));
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_heading_row_of_empty_table() {
        let table = LabelTable::new(PathBuf::from("labels.csv"));
        assert!(table.heading_row().is_empty());
    }
}
