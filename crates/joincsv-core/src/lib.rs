//! joincsv-core: Core library for joining CSV files under a labels file
//!
//! This library provides functionality to:
//! - Read CSV files, discarding a leading byte-order mark
//! - Resolve a labels file into heading -> content column mappings
//! - Plan the output header (explicit heading row or derived from labels)
//! - Project content rows onto that header, joining fan-in columns
//! - Stream any number of content files into one CSV output

pub mod error;
pub mod header;
pub mod join;
pub mod labels;
pub mod merger;
pub mod projector;
pub mod reader;
pub mod table;

pub use error::{Error, Result};
pub use header::{build_derived, build_explicit, HeaderPlan, PlannedColumn};
pub use join::join_fields;
pub use labels::{resolve, HeaderMode, LabelIndex, SOURCE_FILE_LABEL};
pub use merger::{merge_files, merge_with_plan, plan_from_file, MergeOptions, MergeSummary};
pub use projector::{RowOrigin, RowProjector};
pub use reader::{open_csv, parse_labels_str, read_labels};
pub use table::LabelTable;
