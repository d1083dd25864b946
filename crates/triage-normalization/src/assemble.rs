//! Record assembly for both table orientations.

use tracing::trace;
use triage_model::Record;

use crate::label::normalize_label;
use crate::trim::TrimmedTable;
use crate::value::normalize_value;

/// One record per non-blank row; columns are fields.
///
/// Records are tagged with the row's position in the source table.
pub fn assemble_row_wise(table: &TrimmedTable<'_>) -> Vec<Record> {
    let labels: Vec<Option<String>> = (0..table.width())
        .map(|column| normalize_label(table.header(column)))
        .collect();
    let mut records = Vec::with_capacity(table.height());
    for (row, &position) in table.row_positions().iter().enumerate() {
        let mut record = Record::new(position);
        for (column, label) in labels.iter().enumerate() {
            let Some(label) = label else {
                continue;
            };
            let value = normalize_value(table.cell(row, column));
            record.append(label, &value);
        }
        push_populated(&mut records, record);
    }
    records
}

/// One record per patient column; the first column holds field labels.
///
/// Records are tagged with the column's position among patient columns.
pub fn assemble_transposed(table: &TrimmedTable<'_>) -> Vec<Record> {
    let labels: Vec<Option<String>> = table
        .column_cells(0)
        .map(|cell| normalize_label(&normalize_value(cell)))
        .collect();
    let mut records = Vec::with_capacity(table.width().saturating_sub(1));
    for column in 1..table.width() {
        let mut record = Record::new(column - 1);
        for (row, label) in labels.iter().enumerate() {
            let Some(label) = label else {
                continue;
            };
            let value = normalize_value(table.cell(row, column));
            record.append(label, &value);
        }
        push_populated(&mut records, record);
    }
    records
}

fn push_populated(records: &mut Vec<Record>, record: Record) {
    if record.is_empty() {
        trace!(row_index = record.row_index, "skipping record without fields");
        return;
    }
    records.push(record);
}
