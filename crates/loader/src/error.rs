use std::path::PathBuf;

use thiserror::Error;

use restopos_core::DomainError;

pub type LoadResult<T> = Result<T, LoadError>;

/// Reference-data load failure.
///
/// Row numbers count data rows from 1 (the header row is not counted).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: missing column '{column}'")]
    MissingColumn { row: usize, column: &'static str },

    #[error("row {row}, column '{column}': invalid value '{value}': {reason}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
        reason: String,
    },

    #[error("row {row}: {source}")]
    Domain {
        row: usize,
        #[source]
        source: DomainError,
    },
}
