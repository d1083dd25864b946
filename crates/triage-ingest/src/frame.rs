//! Polars `DataFrame` conversion.

use polars::prelude::*;
use triage_model::{CellValue, RawColumn, RawTable};

use crate::error::Result;

/// Converts a Polars `AnyValue` into a raw cell, keeping its primitive kind.
///
/// Nulls become [`CellValue::Missing`]; NaN floats are kept and dropped
/// later by value normalization.
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Missing,
        AnyValue::Boolean(b) => CellValue::Bool(b),
        AnyValue::Int8(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int16(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int32(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int64(v) => CellValue::Integer(v),
        AnyValue::UInt8(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt16(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt32(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => CellValue::Integer(v),
            Err(_) => CellValue::Text(v.to_string()),
        },
        AnyValue::Float32(v) => CellValue::Float(f64::from(v)),
        AnyValue::Float64(v) => CellValue::Float(v),
        AnyValue::String(s) => CellValue::text(s),
        AnyValue::StringOwned(s) => CellValue::text(s.to_string()),
        other => CellValue::text(other.to_string()),
    }
}

/// Converts a typed `DataFrame` into a raw table, using its column names as
/// headers.
pub fn table_from_dataframe(df: &DataFrame) -> Result<RawTable> {
    let mut columns = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let cells = column_cells(column)?;
        columns.push(RawColumn::new(column.name().to_string(), cells));
    }
    Ok(RawTable::new(columns))
}

/// Row-major cells of a `DataFrame`, ignoring its column names.
pub(crate) fn dataframe_rows(df: &DataFrame) -> PolarsResult<Vec<Vec<CellValue>>> {
    let columns = df
        .get_columns()
        .iter()
        .map(column_cells)
        .collect::<PolarsResult<Vec<_>>>()?;
    let rows = (0..df.height())
        .map(|row| {
            columns
                .iter()
                .map(|cells| cells.get(row).cloned().unwrap_or_default())
                .collect()
        })
        .collect();
    Ok(rows)
}

fn column_cells(column: &Column) -> PolarsResult<Vec<CellValue>> {
    (0..column.len())
        .map(|row| column.get(row).map(any_to_cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_cell_keeps_kinds() {
        assert_eq!(any_to_cell(AnyValue::Null), CellValue::Missing);
        assert_eq!(any_to_cell(AnyValue::Int32(42)), CellValue::Integer(42));
        assert_eq!(any_to_cell(AnyValue::Float64(27.5)), CellValue::Float(27.5));
        assert_eq!(
            any_to_cell(AnyValue::String("M")),
            CellValue::Text("M".to_string())
        );
        assert_eq!(any_to_cell(AnyValue::String("")), CellValue::Missing);
        assert_eq!(any_to_cell(AnyValue::Boolean(true)), CellValue::Bool(true));
    }

    #[test]
    fn test_table_from_dataframe() {
        let df = DataFrame::new(vec![
            Series::new("Age".into(), &[Some(70i64), None]).into_column(),
            Series::new("Sex".into(), &["M", "F"]).into_column(),
        ])
        .unwrap();
        let table = table_from_dataframe(&df).unwrap();
        assert_eq!(table.header(0), Some("Age"));
        assert_eq!(table.cell(0, 0), &CellValue::Integer(70));
        assert!(table.cell(1, 0).is_missing());
        assert_eq!(table.cell(1, 1), &CellValue::Text("F".to_string()));
    }

    #[test]
    fn test_dataframe_rows_are_row_major() {
        let df = DataFrame::new(vec![
            Series::new("a".into(), &["Age", "70"]).into_column(),
            Series::new("b".into(), &["Sex", "M"]).into_column(),
        ])
        .unwrap();
        let rows = dataframe_rows(&df).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec![CellValue::from("70"), CellValue::from("M")]);
    }
}
