//! Label resolution: which content columns feed each output heading

use crate::error::{Error, Result};
use crate::table::LabelTable;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reserved heading that always becomes the first column in derived mode
pub const SOURCE_FILE_LABEL: &str = "SourceFile";

/// How the output headings are decided
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// Row 0 of the labels file is the output heading row
    #[default]
    Explicit,
    /// Headings are derived from the labels themselves
    Derived,
}

impl HeaderMode {
    /// Fewest label rows this mode can work with
    pub fn min_label_rows(self) -> usize {
        match self {
            HeaderMode::Explicit => 2,
            HeaderMode::Derived => 1,
        }
    }

    /// Rows scanned for column mappings
    fn mapping_rows(self, table: &LabelTable) -> &[Vec<String>] {
        match self {
            HeaderMode::Explicit => &table.rows[1..],
            HeaderMode::Derived => &table.rows,
        }
    }
}

/// Heading text -> content column positions, in first-seen order
///
/// Positions for one heading keep label scan order (row by row, left to
/// right), which is also the order their values are joined in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelIndex {
    entries: IndexMap<String, Vec<usize>>,
}

impl LabelIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every non-empty cell of a label row
    pub fn scan_row(&mut self, row: &[String]) {
        for (idx, label) in row.iter().enumerate() {
            if label.is_empty() {
                continue;
            }
            self.entries.entry(label.clone()).or_default().push(idx);
        }
    }

    /// Positions mapped to a heading
    pub fn get(&self, heading: &str) -> Option<&[usize]> {
        self.entries.get(heading).map(Vec::as_slice)
    }

    /// Headings in first-seen order
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of distinct headings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no heading was found
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (heading, positions) in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub(crate) fn into_entries(self) -> IndexMap<String, Vec<usize>> {
        self.entries
    }
}

/// Check that a labels table has enough rows for `mode`
pub fn validate(table: &LabelTable, mode: HeaderMode) -> Result<()> {
    let required = mode.min_label_rows();
    if table.row_count() < required {
        return Err(Error::TooFewLabelRows {
            required,
            found: table.row_count(),
        });
    }
    Ok(())
}

/// Build the label index for a labels table
pub fn resolve(table: &LabelTable, mode: HeaderMode) -> Result<LabelIndex> {
    validate(table, mode)?;

    let mut index = LabelIndex::new();
    for row in mode.mapping_rows(table) {
        index.scan_row(row);
    }

    tracing::debug!(
        mode = ?mode,
        rows = table.row_count(),
        headings = index.len(),
        "resolved labels"
    );
    Ok(index)
}
