//! Removal of fully-empty rows and columns.
//!
//! Readers are not trusted to have trimmed their output, so every table goes
//! through this pass before orientation detection.

use triage_model::{CellValue, RawTable};

use crate::error::{NormalizeError, Result};
use crate::value::normalize_value;

/// A view over the non-empty part of a [`RawTable`].
///
/// Rows keep their source positions so records can report where they came
/// from.
#[derive(Debug, Clone)]
pub struct TrimmedTable<'a> {
    table: &'a RawTable,
    rows: Vec<usize>,
    columns: Vec<usize>,
}

impl<'a> TrimmedTable<'a> {
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Source positions of the kept rows.
    pub fn row_positions(&self) -> &[usize] {
        &self.rows
    }

    pub fn header(&self, column: usize) -> &'a str {
        self.table.header(self.columns[column]).unwrap_or_default()
    }

    pub fn cell(&self, row: usize, column: usize) -> &'a CellValue {
        self.table.cell(self.rows[row], self.columns[column])
    }

    /// Cells of one kept column, in kept-row order.
    pub fn column_cells(&self, column: usize) -> impl Iterator<Item = &'a CellValue> + '_ {
        let source = self.columns[column];
        self.rows.iter().map(move |&row| self.table.cell(row, source))
    }
}

/// Drops rows and columns whose cells all normalize to empty.
///
/// Headers do not count as content: a named column without values is dropped.
pub fn trim_table(table: &RawTable) -> Result<TrimmedTable<'_>> {
    let height = table.height();
    let width = table.width();
    let has_value =
        |row: usize, column: usize| !normalize_value(table.cell(row, column)).is_empty();

    let rows: Vec<usize> = (0..height)
        .filter(|&row| (0..width).any(|column| has_value(row, column)))
        .collect();
    // A kept row always holds a value, so some column survives too.
    if rows.is_empty() {
        return Err(NormalizeError::EmptyTable);
    }
    let columns: Vec<usize> = (0..width)
        .filter(|&column| rows.iter().any(|&row| has_value(row, column)))
        .collect();
    Ok(TrimmedTable {
        table,
        rows,
        columns,
    })
}
