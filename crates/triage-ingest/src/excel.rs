//! Excel workbook reading (`.xlsx` and legacy `.xls`).

use std::io::Cursor;

use calamine::{Data, DataType, Reader, open_workbook_auto_from_rs};
use triage_model::{CellValue, RawTable};

use crate::error::{IngestError, Result};
use crate::header::promote_header;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reads the first worksheet of an Excel workbook into a raw table.
pub fn read_excel_bytes(filename: &str, bytes: &[u8]) -> Result<RawTable> {
    let parse_error = |message: String| IngestError::Parse {
        filename: filename.to_string(),
        message,
    };
    let empty = || IngestError::EmptyWorkbook {
        filename: filename.to_string(),
    };

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| parse_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(empty)?
        .map_err(|e| parse_error(e.to_string()))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(data_to_cell).collect())
        .collect();
    promote_header(rows).ok_or_else(empty)
}

/// Maps a calamine cell to a raw cell, keeping numeric and boolean kinds.
pub fn data_to_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Missing,
        Data::String(s) => CellValue::text(s.as_str()),
        Data::Int(v) => CellValue::Integer(*v),
        Data::Float(v) => CellValue::Float(*v),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) => match cell.as_datetime() {
            Some(dt) => CellValue::Text(dt.format(DATETIME_FORMAT).to_string()),
            None => CellValue::text(cell.to_string()),
        },
        other => CellValue::text(other.to_string()),
    }
}
