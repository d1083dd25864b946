//! Table orientation detection.

use std::fmt;

use crate::trim::TrimmedTable;
use crate::value::normalize_value;

/// Marker that identifies the label column of a transposed workbook.
const PATIENT_LABEL_MARKER: &str = "patient#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// One row per patient, one column per field.
    RowWise,
    /// One row per field, one column per patient; the first column holds labels.
    Transposed,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::RowWise => "row-wise",
            Orientation::Transposed => "transposed",
        })
    }
}

/// A table is transposed when it has a label column followed by at least one
/// patient column and some first-column value mentions `patient#`.
pub fn detect_orientation(table: &TrimmedTable<'_>) -> Orientation {
    if table.width() < 2 {
        return Orientation::RowWise;
    }
    let transposed = table
        .column_cells(0)
        .any(|cell| normalize_value(cell).to_lowercase().contains(PATIENT_LABEL_MARKER));
    if transposed {
        Orientation::Transposed
    } else {
        Orientation::RowWise
    }
}
