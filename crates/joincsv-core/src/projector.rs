//! Projecting content rows onto the planned output columns

use crate::error::{Error, Result};
use crate::header::HeaderPlan;
use crate::join::join_fields;
use csv::StringRecord;
use std::path::Path;

/// Where a content row came from, for error reporting
#[derive(Debug, Clone, Copy)]
pub struct RowOrigin<'a> {
    /// Content file
    pub path: &'a Path,
    /// 1-based record number within the file
    pub row: usize,
}

impl<'a> RowOrigin<'a> {
    pub fn new<P: AsRef<Path> + ?Sized>(path: &'a P, row: usize) -> Self {
        Self {
            path: path.as_ref(),
            row,
        }
    }
}

/// Applies a fixed header plan to content rows
#[derive(Debug, Clone)]
pub struct RowProjector {
    plan: HeaderPlan,
    required_width: usize,
}

impl RowProjector {
    pub fn new(plan: HeaderPlan) -> Self {
        let required_width = plan.required_width();
        Self {
            plan,
            required_width,
        }
    }

    /// The plan being applied
    pub fn plan(&self) -> &HeaderPlan {
        &self.plan
    }

    /// Shortest row this projector accepts
    pub fn required_width(&self) -> usize {
        self.required_width
    }

    /// Build one output row, with one field per planned column
    ///
    /// Columns with no sources are blank, single sources are copied as-is,
    /// and several sources are joined with [`join_fields`].
    pub fn project(&self, record: &StringRecord, origin: RowOrigin<'_>) -> Result<Vec<String>> {
        if record.len() < self.required_width {
            return Err(Error::ShortRow {
                path: origin.path.to_path_buf(),
                row: origin.row,
                required: self.required_width,
                found: record.len(),
            });
        }

        self.plan
            .columns
            .iter()
            .map(|column| match column.sources.as_slice() {
                [] => Ok(String::new()),
                [only] => Ok(record[*only].to_string()),
                many => join_fields(many.iter().map(|&p| &record[p])),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::HeaderMode;
    use crate::table::LabelTable;

    fn projector(rows: Vec<Vec<&str>>) -> RowProjector {
        let table = LabelTable::from_rows(rows);
        RowProjector::new(HeaderPlan::from_labels(&table, HeaderMode::Explicit).unwrap())
    }

    fn origin() -> RowOrigin<'static> {
        RowOrigin::new("content.csv", 1)
    }

    #[test]
    fn test_project_reorders_columns() {
        let p = projector(vec![vec!["A", "B"], vec!["B", "A"]]);
        let row = p.project(&StringRecord::from(vec!["x", "y"]), origin()).unwrap();

        assert_eq!(row, vec!["y", "x"]);
    }

    #[test]
    fn test_project_blank_column() {
        let p = projector(vec![vec!["A", "Missing", "B"], vec!["A", "B"]]);
        let row = p.project(&StringRecord::from(vec!["1", "2"]), origin()).unwrap();

        assert_eq!(row, vec!["1", "", "2"]);
    }

    #[test]
    fn test_project_joins_repeated_heading() {
        let p = projector(vec![vec!["Total"], vec!["Total", "Total"]]);
        let row = p.project(&StringRecord::from(vec!["10", "20"]), origin()).unwrap();

        assert_eq!(row, vec!["10,20"]);
    }

    #[test]
    fn test_project_join_escapes_values() {
        let p = projector(vec![vec!["Total"], vec!["Total", "", "Total"]]);
        let row = p
            .project(&StringRecord::from(vec!["1,5", "skip", "2"]), origin())
            .unwrap();

        assert_eq!(row, vec!["\"1,5\",2"]);
    }

    #[test]
    fn test_project_single_source_is_not_escaped() {
        let p = projector(vec![vec!["A"], vec!["A"]]);
        let row = p.project(&StringRecord::from(vec!["a,\"b\""]), origin()).unwrap();

        assert_eq!(row, vec!["a,\"b\""]);
    }

    #[test]
    fn test_project_allows_longer_rows() {
        let p = projector(vec![vec!["A"], vec!["A"]]);
        let row = p
            .project(&StringRecord::from(vec!["a", "ignored", "ignored"]), origin())
            .unwrap();

        assert_eq!(row, vec!["a"]);
    }

    #[test]
    fn test_project_short_row_fails() {
        let p = projector(vec![vec!["A", "B"], vec!["A", "", "B"]]);
        let err = p
            .project(&StringRecord::from(vec!["1", "2"]), RowOrigin::new("c.csv", 7))
            .unwrap_err();

        match err {
            Error::ShortRow {
                path,
                row,
                required,
                found,
            } => {
                assert_eq!(path, Path::new("c.csv"));
                assert_eq!(row, 7);
                assert_eq!(required, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
