use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input file has no header line: {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("Could not find required column '{column}'. Available columns: {available}")]
    ColumnNotFound { column: String, available: String },

    #[error("Delimiter must be a single character, got '{0}'")]
    InvalidDelimiter(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
