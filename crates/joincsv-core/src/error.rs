//! Error types for joincsv-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in joincsv-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open or read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to write the merged output
    #[error("failed to write output: {0}")]
    Output(#[source] csv::Error),

    /// Labels file does not have enough rows for the selected header mode
    #[error("your labels csv must contain at least {required} row(s), found {found} (see help -h)")]
    TooFewLabelRows { required: usize, found: usize },

    /// Derived headings need either a `SourceFile` label or a label on column 0
    #[error("cannot derive header: no SourceFile label and no label maps to column 0")]
    NoAnchorColumn,

    /// A content row is too short for the resolved header plan
    #[error("row {row} in '{path}' has {found} field(s), but the labels require {required}")]
    ShortRow {
        path: PathBuf,
        row: usize,
        required: usize,
        found: usize,
    },

    /// Joining several fields into one output field failed
    #[error("failed to join fields: {0}")]
    FieldJoin(String),

    /// Bad command-line usage
    #[error("{0}")]
    Usage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error was caused by how the tool was invoked
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }
}
