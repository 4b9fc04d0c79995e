// ⚠️ Error types
//
// Classification itself never fails. Errors only exist at the edges:
// loading catalog override files and calling the order API for hints.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog overrides {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog overrides: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown category code {code:?} for entry {entry:?}")]
    UnknownCategory { code: String, entry: String },

    #[error("empty {0} entry in catalog overrides")]
    EmptyEntry(&'static str),
}

#[derive(Error, Debug)]
pub enum HintError {
    #[error("product lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("product lookup failed: {0}")]
    Request(String),

    #[error("product lookup returned HTTP {0}")]
    Status(u16),

    #[error("invalid product payload: {0}")]
    Decode(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GroupingError {
    #[error("order line {line} ({name:?}): line total overflows")]
    LineTotalOverflow { line: usize, name: String },

    #[error("order total overflows")]
    TotalOverflow,

    #[error("{lines} order lines but {results} classifications")]
    LengthMismatch { lines: usize, results: usize },
}
