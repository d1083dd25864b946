use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use triage_model::{Field, PatientRecord};

use crate::types::InspectResult;

pub fn print_summary(result: &InspectResult) {
    println!("Workbook: {}", result.workbook_path.display());
    println!("Layout: {}", result.orientation);
    println!(
        "Patients: {}  Ground truth: {}",
        result.workbook.patient_count(),
        result.workbook.ground_truth.len()
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Patient"),
        header_cell("Source"),
        header_cell("Age"),
        header_cell("Sex"),
        header_cell("Symptoms"),
        header_cell("Fields"),
        header_cell("True Stroke?"),
        header_cell("Stroke Risk"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);
    align_column(&mut table, 7, CellAlignment::Right);

    let mut total_fields = 0usize;
    for (index, patient) in result.workbook.patients.iter().enumerate() {
        total_fields += patient.fields.len();
        let truth = result.workbook.ground_truth_at(index);
        table.add_row(vec![
            Cell::new(&patient.patient_id).add_attribute(Attribute::Bold),
            Cell::new(patient.original_row_index),
            field_cell(patient, Field::Age),
            field_cell(patient, Field::Sex),
            text_cell(&patient.symptoms),
            Cell::new(patient.fields.len()),
            truth.map_or_else(|| dim_cell("-"), |entry| truth_cell(&entry.true_stroke)),
            truth.map_or_else(|| dim_cell("-"), |entry| text_cell(&entry.stroke_risk)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_fields).add_attribute(Attribute::Bold),
        Cell::new(result.workbook.ground_truth.len()).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(12)),
        ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ColumnConstraint::UpperBoundary(Width::Fixed(8)),
        ColumnConstraint::UpperBoundary(Width::Fixed(6)),
        ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ColumnConstraint::LowerBoundary(Width::Fixed(12)),
        ColumnConstraint::LowerBoundary(Width::Fixed(11)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn field_cell(patient: &PatientRecord, field: Field) -> Cell {
    patient
        .field(field)
        .map_or_else(|| dim_cell("-"), Cell::new)
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn truth_cell(value: &str) -> Cell {
    match value.trim().to_lowercase().as_str() {
        "" => dim_cell("-"),
        "yes" | "y" | "1" | "true" => Cell::new(value).fg(Color::Red),
        _ => Cell::new(value).fg(Color::Green),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
