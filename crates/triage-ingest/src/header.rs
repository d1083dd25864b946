//! Header row handling shared by the CSV and Excel readers.

use triage_model::{CellValue, RawTable};

/// Names blank header cells `Unnamed: {index}`, the convention spreadsheet
/// exports use. Repeated names are kept so duplicate columns can be merged
/// during normalization.
pub fn header_names(cells: &[CellValue]) -> Vec<String> {
    cells
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let name = cell.to_string();
            if name.trim().is_empty() {
                format!("Unnamed: {idx}")
            } else {
                name.trim_start_matches('\u{feff}').to_string()
            }
        })
        .collect()
}

/// Splits row-major cells into a header row and data rows.
///
/// Returns `None` when there is no header row at all.
pub fn promote_header(rows: Vec<Vec<CellValue>>) -> Option<RawTable> {
    let mut rows = rows.into_iter();
    let mut header = rows.next()?;
    let data: Vec<Vec<CellValue>> = rows.collect();
    let width = data.iter().map(Vec::len).max().unwrap_or(0).max(header.len());
    header.resize(width, CellValue::Missing);
    Some(RawTable::from_rows(header_names(&header), data))
}
