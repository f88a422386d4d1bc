//! Merge driver: labels first, then every content file in order

use crate::error::{Error, Result};
use crate::header::HeaderPlan;
use crate::labels::HeaderMode;
use crate::projector::{RowOrigin, RowProjector};
use crate::reader::{open_csv, read_labels};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Options for a merge run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    /// How output headings are chosen
    pub header_mode: HeaderMode,
    /// Drop the first row of every content file
    pub skip_header: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            header_mode: HeaderMode::Explicit,
            skip_header: true,
        }
    }
}

/// Counts reported after a merge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
    /// Content files processed
    pub files: usize,
    /// Data rows written, not counting the header
    pub rows_written: usize,
    /// Output columns
    pub columns: usize,
}

/// Read a labels file and plan the output header
pub fn plan_from_file<P: AsRef<Path>>(labels: P, mode: HeaderMode) -> Result<HeaderPlan> {
    let table = read_labels(labels)?;
    HeaderPlan::from_labels(&table, mode)
}

/// Merge content files under the headings of a labels file
///
/// The header row is written first, then each content file is streamed
/// row by row. Output already written stays in `out` if a later file fails.
pub fn merge_files<L, C, W>(
    labels: L,
    contents: &[C],
    options: &MergeOptions,
    out: W,
) -> Result<MergeSummary>
where
    L: AsRef<Path>,
    C: AsRef<Path>,
    W: Write,
{
    let plan = plan_from_file(labels, options.header_mode)?;
    let mut writer = csv::Writer::from_writer(out);

    let summary = merge_with_plan(plan, contents, options.skip_header, &mut writer)?;
    writer.flush()?;
    Ok(summary)
}

/// Write the header for `plan` and project every content file through it
pub fn merge_with_plan<C, W>(
    plan: HeaderPlan,
    contents: &[C],
    skip_header: bool,
    writer: &mut csv::Writer<W>,
) -> Result<MergeSummary>
where
    C: AsRef<Path>,
    W: Write,
{
    writer.write_record(plan.headings()).map_err(Error::Output)?;

    let projector = RowProjector::new(plan);
    let mut summary = MergeSummary {
        columns: projector.plan().column_count(),
        ..MergeSummary::default()
    };

    for content in contents {
        let path = content.as_ref();
        let written = merge_content(&projector, path, skip_header, writer)?;
        tracing::debug!(path = %path.display(), rows = written, "merged content file");

        summary.files += 1;
        summary.rows_written += written;
    }

    tracing::info!(
        files = summary.files,
        rows = summary.rows_written,
        columns = summary.columns,
        "merge complete"
    );
    Ok(summary)
}

fn merge_content<W: Write>(
    projector: &RowProjector,
    path: &Path,
    skip_header: bool,
    writer: &mut csv::Writer<W>,
) -> Result<usize> {
    let mut reader = open_csv(path)?;
    let mut record = StringRecord::new();
    let mut row = 0;
    let mut written = 0;

    loop {
        let more = reader.read_record(&mut record).map_err(|e| Error::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        if !more {
            break;
        }
        row += 1;
        if skip_header && row == 1 {
            continue;
        }

        let projected = projector.project(&record, RowOrigin::new(path, row))?;
        writer.write_record(&projected).map_err(Error::Output)?;
        written += 1;
    }

    if skip_header && row == 0 {
        tracing::warn!(path = %path.display(), "content file is empty, no header row to skip");
    }
    Ok(written)
}
