use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// Error from Polars Series operations
    #[error("Series error: {0}")]
    Series(String),

    /// A decimal total could not be represented in the output type
    #[error("Decimal error: {0}")]
    Decimal(String),
}

// Implement From<polars::error::PolarsError> for ComputeError
impl From<polars::error::PolarsError> for ComputeError {
    fn from(error: polars::error::PolarsError) -> Self {
        let compute_error = match error {
            polars::error::PolarsError::ShapeMismatch(_) => {
                ComputeError::DataFrame(format!("Shape mismatch: {}", error))
            }
            polars::error::PolarsError::SchemaMismatch(_) => {
                ComputeError::DataFrame(format!("Schema mismatch: {}", error))
            }
            polars::error::PolarsError::ColumnNotFound(_) => {
                ComputeError::DataFrame(format!("Column not found: {}", error))
            }
            _ => ComputeError::Series(format!("Series error: {}", error)),
        };
        error!(?compute_error, "Polars operation failed");
        compute_error
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
