//! CSV workbook reading.

use std::io::Cursor;

use polars::prelude::*;
use triage_model::RawTable;

use crate::error::{IngestError, Result};
use crate::frame::dataframe_rows;
use crate::header::promote_header;

/// Reads CSV bytes into a raw table.
///
/// Every column is read as text and the first line becomes the header, so
/// repeated and blank header names survive untouched. Lines longer than the
/// first are truncated; shorter ones are padded with missing cells.
pub fn read_csv_bytes(filename: &str, bytes: &[u8]) -> Result<RawTable> {
    let parse_error = |e: PolarsError| IngestError::Parse {
        filename: filename.to_string(),
        message: e.to_string(),
    };

    let df = CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .with_parse_options(CsvParseOptions::default().with_truncate_ragged_lines(true))
        .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
        .finish()
        .map_err(parse_error)?;

    let rows = dataframe_rows(&df).map_err(parse_error)?;
    promote_header(rows).ok_or_else(|| IngestError::EmptyWorkbook {
        filename: filename.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_model::CellValue;

    #[test]
    fn test_read_csv_bytes_keeps_text() {
        let table = read_csv_bytes("cases.csv", b"Patient#,Age,BMI\n001,70,27.0\n").unwrap();
        assert_eq!(table.header(0), Some("Patient#"));
        assert_eq!(table.height(), 1);
        assert_eq!(table.cell(0, 0), &CellValue::Text("001".to_string()));
        assert_eq!(table.cell(0, 2), &CellValue::Text("27.0".to_string()));
    }

    #[test]
    fn test_read_csv_bytes_names_blank_headers() {
        let table = read_csv_bytes("cases.csv", b",Age,Age\nPatient#,70,71\n").unwrap();
        assert_eq!(table.header(0), Some("Unnamed: 0"));
        assert_eq!(table.header(1), Some("Age"));
        assert_eq!(table.header(2), Some("Age"));
    }

    #[test]
    fn test_read_csv_bytes_header_only() {
        let table = read_csv_bytes("cases.csv", b"Age,Sex\n").unwrap();
        assert_eq!(table.width(), 2);
        assert_eq!(table.height(), 0);
    }
}
