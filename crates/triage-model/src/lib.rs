//! Data model shared by the triage workbook crates.
//!
//! - [`RawTable`]: spreadsheet content as read from disk, before normalization.
//! - [`Field`]: the canonical field vocabulary.
//! - [`Record`] and [`PatientRecord`]: a patient during and after finalization.
//! - [`NormalizedWorkbook`]: the `{patients, groundTruth}` payload.

pub mod field;
pub mod record;
pub mod table;

pub use field::{Field, SINGLE_SEGMENT_FIELDS, SYMPTOM_FIELDS};
pub use record::{
    GroundTruthEntry, NormalizedWorkbook, PatientRecord, RESERVED_KEYS, Record, SEGMENT_SEPARATOR,
};
pub use table::{CellValue, RawColumn, RawTable};
