//! Workbook type detection from the upload filename.

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookKind {
    Csv,
    /// `.xlsx` and `.xls`; calamine detects the container format itself.
    Excel,
}

impl WorkbookKind {
    pub fn from_filename(filename: &str) -> Result<Self> {
        let lower = filename.trim().to_lowercase();
        if lower.ends_with(".csv") {
            Ok(Self::Csv)
        } else if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
            Ok(Self::Excel)
        } else {
            Err(IngestError::UnsupportedFileType {
                filename: filename.to_string(),
            })
        }
    }
}
