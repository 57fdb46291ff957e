use std::path::PathBuf;
use thiserror::Error;

/// Error types for loading the order dataset
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dataset file could not be opened
    #[error("Failed to open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV reader (header or record framing)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV is missing a column every order needs
    #[error("Missing column '{0}' in dataset header")]
    MissingColumn(String),

    /// The order date matched none of the configured formats
    #[error("Row {row}: invalid order date '{value}'")]
    InvalidDate { row: u64, value: String },

    /// A row could not be turned into an order record
    #[error("Row {row}: {reason}")]
    InvalidRow { row: u64, reason: String },
}

/// Type alias for Result with LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
