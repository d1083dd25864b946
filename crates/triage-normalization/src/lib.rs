//! Workbook normalization.
//!
//! Turns a [`RawTable`] of patient data, in either row-per-patient or
//! transposed label-per-row layout, into a [`NormalizedWorkbook`]:
//!
//! 1. Trim fully-empty rows and columns ([`trim_table`]).
//! 2. Pick a layout ([`detect_orientation`]).
//! 3. Assemble one [`Record`](triage_model::Record) per patient, merging
//!    duplicate labels ([`assemble_row_wise`], [`assemble_transposed`]).
//! 4. Finalize: identifiers, symptom summary and note, atomic cleanup and
//!    ground-truth split ([`finalize_records`]).
//!
//! Only an empty table is an error; unrecognized or malformed fields degrade
//! to empty values or fallback text.
//!
//! # Example
//!
//! ```
//! use triage_model::{CellValue, RawColumn, RawTable};
//! use triage_normalization::normalize_table;
//!
//! let table = RawTable::new(vec![
//!     RawColumn::new("Age", vec![CellValue::from("75")]),
//!     RawColumn::new("True Stroke?", vec![CellValue::from("No")]),
//! ]);
//! let workbook = normalize_table(&table).unwrap();
//! assert_eq!(workbook.patients[0].patient_id, "1");
//! assert_eq!(workbook.ground_truth[0].true_stroke, "No");
//! ```

pub mod assemble;
pub mod error;
pub mod finalize;
pub mod label;
pub mod narrative;
pub mod options;
pub mod orientation;
pub mod trim;
pub mod value;

use tracing::{debug, info_span};
use triage_model::{NormalizedWorkbook, RawTable};

pub use assemble::{assemble_row_wise, assemble_transposed};
pub use error::{NormalizeError, Result};
pub use finalize::{
    DerivedFields, assign_identity, collapse_atomic_fields, derive_fields, finalize_records,
    split_ground_truth,
};
pub use label::normalize_label;
pub use narrative::{NarrativeFallbacks, build_note, symptom_summary};
pub use options::{NormalizeOptions, OrientationMode};
pub use orientation::{Orientation, detect_orientation};
pub use trim::{TrimmedTable, trim_table};
pub use value::{format_numeric, narrative_segment, normalize_value, primary_segment};

/// Result of a normalization pass together with the layout that was used.
#[derive(Debug, Clone)]
pub struct NormalizeOutcome {
    pub orientation: Orientation,
    pub workbook: NormalizedWorkbook,
}

/// Normalizes a table with default options.
pub fn normalize_table(table: &RawTable) -> Result<NormalizedWorkbook> {
    normalize_table_with(table, &NormalizeOptions::default()).map(|outcome| outcome.workbook)
}

pub fn normalize_table_with(
    table: &RawTable,
    options: &NormalizeOptions,
) -> Result<NormalizeOutcome> {
    let span = info_span!("normalize", width = table.width(), height = table.height());
    let _guard = span.enter();

    let trimmed = trim_table(table)?;
    let orientation = match options.orientation {
        OrientationMode::Detect => detect_orientation(&trimmed),
        OrientationMode::Force(orientation) => orientation,
    };
    let records = match orientation {
        Orientation::RowWise => assemble_row_wise(&trimmed),
        Orientation::Transposed => assemble_transposed(&trimmed),
    };
    debug!(
        %orientation,
        rows = trimmed.height(),
        columns = trimmed.width(),
        records = records.len(),
        "assembled records"
    );

    let workbook = finalize_records(records, &options.fallbacks);
    debug!(
        patients = workbook.patients.len(),
        ground_truth = workbook.ground_truth.len(),
        "finalized workbook"
    );
    Ok(NormalizeOutcome {
        orientation,
        workbook,
    })
}
