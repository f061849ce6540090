use std::path::PathBuf;

use thiserror::Error;

/// Structural failures while loading an input table.
///
/// Data-quality problems (blank cells, unknown countries, rows missing from one
/// source) never surface here; they are filtered where they occur.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("{source_name}: required column {column} not found")]
    MissingColumn { source_name: String, column: String },

    #[error("{source_name}: table has no header row")]
    EmptySource { source_name: String },

    #[error("source manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, DataError>;
