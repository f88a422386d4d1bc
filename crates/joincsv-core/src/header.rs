//! Output header planning
//!
//! A [`HeaderPlan`] fixes the output column order once, from the labels
//! file, and is then reused unchanged for every content row.

use crate::error::{Error, Result};
use crate::labels::{self, HeaderMode, LabelIndex, SOURCE_FILE_LABEL};
use crate::table::LabelTable;
use serde::{Deserialize, Serialize};

/// One output column and the content positions that feed it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedColumn {
    /// Output heading
    pub heading: String,
    /// Content positions, in join order. Empty means a blank column.
    pub sources: Vec<usize>,
}

impl PlannedColumn {
    fn new(heading: impl Into<String>, sources: Vec<usize>) -> Self {
        Self {
            heading: heading.into(),
            sources,
        }
    }
}

/// Ordered output columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderPlan {
    /// Mode the plan was built in
    pub mode: HeaderMode,
    /// Output columns, in order
    pub columns: Vec<PlannedColumn>,
}

impl HeaderPlan {
    /// Plan the output from a labels table
    pub fn from_labels(table: &LabelTable, mode: HeaderMode) -> Result<Self> {
        let index = labels::resolve(table, mode)?;
        match mode {
            HeaderMode::Explicit => Ok(build_explicit(&table.heading_row(), &index)),
            HeaderMode::Derived => build_derived(index),
        }
    }

    /// Get the number of output columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Output headings, in order
    pub fn headings(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.heading.as_str()).collect()
    }

    /// Shortest content row this plan can project
    pub fn required_width(&self) -> usize {
        self.columns
            .iter()
            .flat_map(|c| c.sources.iter())
            .max()
            .map_or(0, |&max| max + 1)
    }

    /// Find a column by heading
    pub fn find_column(&self, heading: &str) -> Option<&PlannedColumn> {
        self.columns.iter().find(|c| c.heading == heading)
    }
}

/// Plan columns from an explicit heading row
///
/// Every heading is kept in order; a heading with no label mapping becomes
/// a blank column.
pub fn build_explicit(headings: &[String], index: &LabelIndex) -> HeaderPlan {
    let columns = headings
        .iter()
        .map(|heading| {
            let sources = index.get(heading).map(<[usize]>::to_vec).unwrap_or_default();
            PlannedColumn::new(heading.as_str(), sources)
        })
        .collect();

    HeaderPlan {
        mode: HeaderMode::Explicit,
        columns,
    }
}

/// Plan columns from the label index alone
///
/// The first column is `SourceFile` when labelled, otherwise the first
/// heading (in first-seen order) mapped to content position 0. The rest
/// follow in first-seen order.
pub fn build_derived(index: LabelIndex) -> Result<HeaderPlan> {
    let mut entries = index.into_entries();

    let anchor = match entries.get_index_of(SOURCE_FILE_LABEL) {
        Some(pos) => pos,
        None => entries
            .values()
            .position(|sources| sources.contains(&0))
            .ok_or(Error::NoAnchorColumn)?,
    };

    let (heading, sources) = entries
        .shift_remove_index(anchor)
        .ok_or(Error::NoAnchorColumn)?;
    tracing::debug!(anchor = %heading, "derived first column");

    let mut columns = Vec::with_capacity(entries.len() + 1);
    columns.push(PlannedColumn::new(heading, sources));
    columns.extend(
        entries
            .into_iter()
            .map(|(heading, sources)| PlannedColumn::new(heading, sources)),
    );

    Ok(HeaderPlan {
        mode: HeaderMode::Derived,
        columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(rows: Vec<Vec<&str>>, mode: HeaderMode) -> Result<HeaderPlan> {
        HeaderPlan::from_labels(&LabelTable::from_rows(rows), mode)
    }

    #[test]
    fn test_explicit_plan_follows_heading_row() {
        let plan = plan(vec![vec!["A", "B"], vec!["B", "A"]], HeaderMode::Explicit).unwrap();

        assert_eq!(plan.headings(), vec!["A", "B"]);
        assert_eq!(plan.columns[0].sources, vec![1]);
        assert_eq!(plan.columns[1].sources, vec![0]);
    }

    #[test]
    fn test_explicit_plan_trims_trailing_headings() {
        let plan = plan(
            vec![vec!["A", "B", "", ""], vec!["A", "B", "", ""]],
            HeaderMode::Explicit,
        )
        .unwrap();

        assert_eq!(plan.headings(), vec!["A", "B"]);
        assert_eq!(plan.column_count(), 2);
    }

    #[test]
    fn test_explicit_unmapped_heading_is_blank() {
        let plan = plan(vec![vec!["A", "Missing"], vec!["A"]], HeaderMode::Explicit).unwrap();

        assert!(plan.find_column("Missing").unwrap().sources.is_empty());
    }

    #[test]
    fn test_explicit_ignores_labels_not_in_heading_row() {
        let plan = plan(vec![vec!["A"], vec!["A", "Extra"]], HeaderMode::Explicit).unwrap();

        assert_eq!(plan.headings(), vec!["A"]);
        assert!(plan.find_column("Extra").is_none());
    }

    #[test]
    fn test_derived_promotes_source_file() {
        let plan = plan(
            vec![vec!["Name", "Total", "SourceFile"], vec!["Name", "Total"]],
            HeaderMode::Derived,
        )
        .unwrap();

        assert_eq!(plan.headings(), vec!["SourceFile", "Name", "Total"]);
        assert_eq!(plan.columns[0].sources, vec![2]);
    }

    #[test]
    fn test_derived_promotes_column_zero() {
        let plan = plan(vec![vec!["", "Total", "Name"], vec!["Id", "Total"]], HeaderMode::Derived)
            .unwrap();

        assert_eq!(plan.headings(), vec!["Id", "Total", "Name"]);
        assert_eq!(plan.columns[1].sources, vec![1, 1]);
    }

    #[test]
    fn test_derived_anchor_is_first_seen_at_zero() {
        let plan = plan(vec![vec!["", "B"], vec!["A", "B"], vec!["B"]], HeaderMode::Derived).unwrap();

        // "B" is seen first and also maps to 0 in the last row
        assert_eq!(plan.headings(), vec!["B", "A"]);
        assert_eq!(plan.columns[0].sources, vec![1, 1, 0]);
    }

    #[test]
    fn test_derived_without_anchor_fails() {
        let err = plan(vec![vec!["", "A", "B"]], HeaderMode::Derived).unwrap_err();

        assert!(matches!(err, Error::NoAnchorColumn));
    }

    #[test]
    fn test_required_width() {
        let plan = plan(vec![vec!["A", "B", "C"], vec!["", "A", "", "B"]], HeaderMode::Explicit)
            .unwrap();

        assert_eq!(plan.required_width(), 4);

        let blank = plan_blank();
        assert_eq!(blank.required_width(), 0);
    }

    fn plan_blank() -> HeaderPlan {
        build_explicit(&["A".to_string()], &LabelIndex::new())
    }
}
