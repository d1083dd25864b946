//! Error types for workbook ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning an upload into a raw table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Upload Errors ===
    /// The upload carried no filename, so its type cannot be determined.
    #[error("missing filename on upload")]
    MissingFilename,

    /// The upload had no content.
    #[error("uploaded file is empty")]
    EmptyUpload,

    /// The filename suffix is not a supported workbook type.
    #[error("unsupported file type '{filename}': upload .csv, .xls, or .xlsx files")]
    UnsupportedFileType { filename: String },

    // === Parsing Errors ===
    /// The reader could not parse the workbook.
    #[error("unable to parse workbook {filename}: {message}")]
    Parse { filename: String, message: String },

    /// The workbook parsed but holds no data rows.
    #[error("workbook {filename} does not contain any rows")]
    EmptyWorkbook { filename: String },

    /// A DataFrame could not be converted.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    // === File System Errors ===
    /// File not found.
    #[error("workbook not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    /// True for problems with the submitted workbook itself, as opposed to
    /// local I/O failures. Transport layers map these to a client error.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::FileNotFound { .. } | Self::FileRead { .. })
    }

    /// True when the workbook type is wrong rather than its content.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedFileType { .. })
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        IngestError::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::UnsupportedFileType {
            filename: "notes.txt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported file type 'notes.txt': upload .csv, .xls, or .xlsx files"
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(IngestError::EmptyUpload.is_client_error());
        assert!(
            IngestError::EmptyWorkbook {
                filename: "a.csv".to_string()
            }
            .is_client_error()
        );
        assert!(
            !IngestError::FileNotFound {
                path: PathBuf::from("a.csv")
            }
            .is_client_error()
        );
        assert!(!IngestError::MissingFilename.is_unsupported_type());
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("Age".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
