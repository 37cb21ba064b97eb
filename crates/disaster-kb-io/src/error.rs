use std::io;

use thiserror::Error;

/// Error type for reading the source dataset and writing the knowledge base.
#[derive(Debug, Error)]
pub enum KbError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("required column '{column}' not found in header")]
    MissingColumn { column: String },
}

pub type Result<T> = std::result::Result<T, KbError>;
