//! Error types for the CLI and CSV glue.
//!
//! The core pipeline is infallible over valid strings; everything that can
//! actually fail lives at the I/O edge and surfaces here.

use thiserror::Error;

/// Main error type for the bulletsplit binary.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The requested column does not exist in the CSV header.
    #[error("Column '{column}' not found in CSV header. Available columns: {available}")]
    MissingColumn { column: String, available: String },

    /// CSV reading or writing failed.
    #[error("CSV processing failed: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization of the segment list failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for bulletsplit operations.
pub type Result<T> = std::result::Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = SplitError::MissingColumn {
            column: "condition".to_string(),
            available: "id, notes".to_string(),
        };
        assert!(err.to_string().contains("'condition'"));
        assert!(err.to_string().contains("id, notes"));
    }
}
