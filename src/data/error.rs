use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the data pipeline.
///
/// Loader errors abort the affected dataset: there is no partial or
/// degraded aggregation downstream of a failed load.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("input file not found: {path}")]
    MissingFile { path: PathBuf },

    #[error("malformed record in {file}: {detail}")]
    MalformedRecord { file: String, detail: String },

    #[error("specialization '{specialization}' has unrecognized group type '{group_type}'")]
    UnrecognizedGroupType {
        specialization: String,
        group_type: String,
    },

    #[error("no matching data: {what}")]
    EmptyResult { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl DataError {
    /// Build a [`DataError::MalformedRecord`] with file context.
    pub fn malformed(file: impl Into<String>, detail: impl Into<String>) -> Self {
        DataError::MalformedRecord {
            file: file.into(),
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
