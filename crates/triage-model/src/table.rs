//! Raw tabular input as produced by a workbook reader.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell before any normalization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    #[default]
    Missing,
}

impl CellValue {
    /// Builds a text cell, mapping an empty string to [`CellValue::Missing`].
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Missing
        } else {
            Self::Text(value)
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Raw display form. Missing renders as an empty string; text is not trimmed.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Integer(v) => write!(f, "{v}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
            CellValue::Missing => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawColumn {
    pub name: String,
    pub cells: Vec<CellValue>,
}

impl RawColumn {
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }
}

/// Column-major table with named columns.
///
/// Columns may be ragged; reads past the end of a column yield
/// [`CellValue::Missing`], so the table height is the longest column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawTable {
    columns: Vec<RawColumn>,
}

impl RawTable {
    pub fn new(columns: Vec<RawColumn>) -> Self {
        Self { columns }
    }

    /// Builds a table from a header row and row-major data.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let mut columns: Vec<RawColumn> = headers
            .into_iter()
            .map(|name| RawColumn::new(name, Vec::with_capacity(rows.len())))
            .collect();
        for row in rows {
            let mut cells = row.into_iter();
            for column in &mut columns {
                column.cells.push(cells.next().unwrap_or_default());
            }
        }
        Self { columns }
    }

    pub fn columns(&self) -> &[RawColumn] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.columns
            .iter()
            .map(|column| column.cells.len())
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn header(&self, column: usize) -> Option<&str> {
        self.columns.get(column).map(|column| column.name.as_str())
    }

    /// Returns the cell at `(row, column)`, or `Missing` when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        static MISSING: CellValue = CellValue::Missing;
        self.columns
            .get(column)
            .and_then(|column| column.cells.get(row))
            .unwrap_or(&MISSING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_pads_short_rows() {
        let table = RawTable::from_rows(
            vec!["Age".to_string(), "Sex".to_string()],
            vec![vec!["70".into()], vec!["81".into(), "F".into()]],
        );
        assert_eq!(table.width(), 2);
        assert_eq!(table.height(), 2);
        assert_eq!(table.cell(0, 1), &CellValue::Missing);
        assert_eq!(table.cell(1, 1), &CellValue::Text("F".to_string()));
    }

    #[test]
    fn out_of_range_reads_are_missing() {
        let table = RawTable::new(vec![
            RawColumn::new("A", vec![CellValue::Integer(1)]),
            RawColumn::new("B", vec![CellValue::Integer(2), CellValue::Integer(3)]),
        ]);
        assert_eq!(table.height(), 2);
        assert!(table.cell(1, 0).is_missing());
        assert!(table.cell(0, 9).is_missing());
    }

    #[test]
    fn empty_text_is_missing() {
        assert!(CellValue::text("").is_missing());
        assert!(!CellValue::text(" ").is_missing());
    }
}
