//! Workbook entry points: uploads and local files.

use std::fs;
use std::path::Path;

use tracing::{debug, info_span};
use triage_model::RawTable;

use crate::csv::read_csv_bytes;
use crate::error::{IngestError, Result};
use crate::excel::read_excel_bytes;
use crate::kind::WorkbookKind;

/// Parses an uploaded workbook.
///
/// Checks run in upload order: filename present, content present, supported
/// suffix, parseable content, at least one data row.
pub fn read_workbook_bytes(filename: &str, bytes: &[u8]) -> Result<RawTable> {
    if filename.trim().is_empty() {
        return Err(IngestError::MissingFilename);
    }
    if bytes.is_empty() {
        return Err(IngestError::EmptyUpload);
    }
    let kind = WorkbookKind::from_filename(filename)?;

    let span = info_span!("read_workbook", filename, ?kind);
    let _guard = span.enter();

    let table = match kind {
        WorkbookKind::Csv => read_csv_bytes(filename, bytes)?,
        WorkbookKind::Excel => read_excel_bytes(filename, bytes)?,
    };
    if table.height() == 0 {
        return Err(IngestError::EmptyWorkbook {
            filename: filename.to_string(),
        });
    }

    debug!(
        bytes = bytes.len(),
        rows = table.height(),
        columns = table.width(),
        "workbook loaded"
    );
    Ok(table)
}

/// Reads a workbook from disk. The file name decides the reader.
pub fn read_workbook(path: &Path) -> Result<RawTable> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !filename.is_empty() {
        WorkbookKind::from_filename(&filename)?;
    }

    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_workbook_bytes(&filename, &bytes)
}
