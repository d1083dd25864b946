//! Error types for workbook normalization.

use thiserror::Error;

/// Structural rejections. Field-level problems never surface as errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// No cell holds a value once empty rows and columns are trimmed.
    #[error("workbook does not contain any rows")]
    EmptyTable,
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
