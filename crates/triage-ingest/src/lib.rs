//! Workbook ingestion for triage normalization.
//!
//! Turns an uploaded `.csv`, `.xlsx` or `.xls` workbook into a
//! [`RawTable`](triage_model::RawTable): the first row becomes the header,
//! blank header cells are named `Unnamed: {index}`, and cell kinds
//! (text, integer, float, boolean) are preserved where the format has them.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use triage_ingest::read_workbook;
//!
//! let table = read_workbook(Path::new("Vertigo Cases.xlsx"))?;
//! println!("{} rows x {} columns", table.height(), table.width());
//! ```

mod csv;
mod error;
mod excel;
mod frame;
mod header;
mod kind;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Workbook Reading ===
pub use kind::WorkbookKind;
pub use reader::{read_workbook, read_workbook_bytes};

// === Conversions ===
pub use excel::data_to_cell;
pub use frame::{any_to_cell, table_from_dataframe};
pub use header::header_names;
