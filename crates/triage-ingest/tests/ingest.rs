//! Reading workbooks from disk and from uploads.

use std::io::Write;

use tempfile::{NamedTempFile, TempDir};
use triage_ingest::{IngestError, read_workbook, read_workbook_bytes};
use triage_model::CellValue;

fn temp_csv(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn reads_row_wise_csv_from_disk() {
    let file = temp_csv("Patient#,Age,Sex\n1,75,M\n2,64,F\n");
    let table = read_workbook(file.path()).unwrap();
    assert_eq!(table.width(), 3);
    assert_eq!(table.height(), 2);
    assert_eq!(table.cell(1, 2), &CellValue::Text("F".to_string()));
}

#[test]
fn reads_transposed_csv_with_unnamed_label_column() {
    let file = temp_csv(",Case A,Case B\nPatient#,1,2\nAge,70,81\n");
    let table = read_workbook(file.path()).unwrap();
    assert_eq!(table.header(0), Some("Unnamed: 0"));
    assert_eq!(table.cell(0, 0), &CellValue::Text("Patient#".to_string()));
    assert_eq!(table.cell(1, 2), &CellValue::Text("81".to_string()));
}

#[test]
fn ragged_rows_are_padded() {
    let table = read_workbook_bytes("cases.csv", b"Age,Sex,BMI\n70,M\n").unwrap();
    assert_eq!(table.width(), 3);
    assert!(table.cell(0, 2).is_missing());
}

#[test]
fn header_only_workbook_is_empty() {
    let err = read_workbook_bytes("cases.csv", b"Age,Sex\n").unwrap_err();
    assert!(matches!(err, IngestError::EmptyWorkbook { .. }));
    assert_eq!(err.to_string(), "workbook cases.csv does not contain any rows");
}

#[test]
fn upload_checks_run_in_order() {
    assert!(matches!(
        read_workbook_bytes("", b"").unwrap_err(),
        IngestError::MissingFilename
    ));
    assert!(matches!(
        read_workbook_bytes("notes.txt", b"").unwrap_err(),
        IngestError::EmptyUpload
    ));
    let err = read_workbook_bytes("notes.txt", b"Age\n70\n").unwrap_err();
    assert!(err.is_unsupported_type());
    assert!(err.is_client_error());
}

#[test]
fn unsupported_file_on_disk_is_rejected_before_reading() {
    let dir = TempDir::new().unwrap();
    let err = read_workbook(&dir.path().join("cases.json")).unwrap_err();
    assert!(err.is_unsupported_type());
}

#[test]
fn missing_file_is_not_a_client_error() {
    let dir = TempDir::new().unwrap();
    let err = read_workbook(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
    assert!(!err.is_client_error());
}

#[test]
fn corrupt_excel_upload_is_a_parse_error() {
    let err = read_workbook_bytes("cases.xlsx", b"PK\x03\x04broken").unwrap_err();
    assert!(matches!(err, IngestError::Parse { .. }));
}
