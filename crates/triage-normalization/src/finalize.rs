//! Record finalization: identity, derived text, atomic cleanup, ground truth.
//!
//! Each record passes through the stages in a fixed order:
//!
//! 1. [`assign_identity`]: patient identifier and `Patient#`/`PatientID` defaults.
//! 2. [`derive_fields`]: symptom summary and note, read from merged values.
//! 3. [`collapse_atomic_fields`]: single-segment fields reduced to their first value.
//! 4. [`split_ground_truth`]: outcome fields moved to the ground-truth collection.
//!
//! Stage 2 must run before stage 3 so notes can use the descriptive half of
//! merged values.

use tracing::trace;
use triage_model::{
    Field, GroundTruthEntry, NormalizedWorkbook, PatientRecord, RESERVED_KEYS, Record,
    SINGLE_SEGMENT_FIELDS,
};

use crate::narrative::{NarrativeFallbacks, build_note, symptom_summary};
use crate::value::primary_segment;

/// Text computed from a record before cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedFields {
    pub symptoms: String,
    pub note: String,
}

/// Finalizes assembled records in order.
///
/// Sequential identifiers count emitted patients, so records dropped during
/// assembly never consume one.
pub fn finalize_records(
    records: Vec<Record>,
    fallbacks: &NarrativeFallbacks,
) -> NormalizedWorkbook {
    let mut workbook = NormalizedWorkbook::default();
    for mut record in records {
        let patient_index = workbook.patients.len();
        let patient_id = assign_identity(&mut record, patient_index);
        let derived = derive_fields(&record, &patient_id, fallbacks);
        collapse_atomic_fields(&mut record);
        if let Some(entry) = split_ground_truth(&mut record, &patient_id) {
            workbook.ground_truth.push(GroundTruthEntry {
                patient_index,
                ..entry
            });
        }
        trace!(
            row_index = record.row_index,
            fields = record.len(),
            "finalized patient record"
        );
        workbook
            .patients
            .push(into_patient(record, patient_id, derived));
    }
    workbook
}

/// Resolves the patient identifier and fills `Patient#`/`PatientID` when absent.
pub fn assign_identity(record: &mut Record, output_index: usize) -> String {
    let patient_id = record
        .field(Field::PatientNumber)
        .map_or_else(|| (output_index + 1).to_string(), str::to_string);
    record.set_field_if_absent(Field::PatientNumber, &patient_id);
    record.set_if_absent("PatientID", &patient_id);
    patient_id
}

pub fn derive_fields(
    record: &Record,
    patient_id: &str,
    fallbacks: &NarrativeFallbacks,
) -> DerivedFields {
    DerivedFields {
        symptoms: symptom_summary(record),
        note: build_note(record, patient_id, fallbacks),
    }
}

/// Replaces every single-segment field with its primary segment.
pub fn collapse_atomic_fields(record: &mut Record) {
    for field in SINGLE_SEGMENT_FIELDS {
        let Some(value) = record.field(field) else {
            continue;
        };
        let primary = primary_segment(value).to_string();
        record.set_field(field, primary);
    }
}

/// Removes the outcome fields and returns a ground-truth entry when either
/// held a value.
///
/// `Percent Chance` stands in for `Stroke Risk` only when the latter is absent.
pub fn split_ground_truth(record: &mut Record, patient_id: &str) -> Option<GroundTruthEntry> {
    let true_stroke = record.take_field(Field::TrueStroke).unwrap_or_default();
    let stroke_risk = record
        .take_field(Field::StrokeRisk)
        .or_else(|| record.take_field(Field::PercentChance))
        .unwrap_or_default();
    if true_stroke.is_empty() && stroke_risk.is_empty() {
        return None;
    }
    Some(GroundTruthEntry {
        patient_number: patient_id.to_string(),
        true_stroke,
        stroke_risk,
        ..GroundTruthEntry::default()
    })
}

fn into_patient(record: Record, patient_id: String, derived: DerivedFields) -> PatientRecord {
    let original_row_index = record.row_index;
    let mut fields = record.into_values();
    fields.retain(|key, _| {
        !RESERVED_KEYS.contains(&key.as_str())
            && !Field::from_key(key).is_some_and(Field::is_ground_truth)
    });
    PatientRecord {
        patient_id,
        original_row_index,
        symptoms: derived.symptoms,
        note: derived.note,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(row_index: usize, values: &[(&str, &str)]) -> Record {
        let mut record = Record::new(row_index);
        for (label, value) in values {
            record.append(label, value);
        }
        record
    }

    #[test]
    fn identifiers_prefer_patient_number() {
        let mut with_number = record(5, &[("Patient#", "P-9"), ("Age", "70")]);
        assert_eq!(assign_identity(&mut with_number, 0), "P-9");
        assert_eq!(with_number.get("PatientID"), Some("P-9"));

        let mut without = record(5, &[("Age", "70")]);
        assert_eq!(assign_identity(&mut without, 2), "3");
        assert_eq!(without.get("Patient#"), Some("3"));
        assert_eq!(without.get("PatientID"), Some("3"));
    }

    #[test]
    fn existing_patient_id_column_is_kept() {
        let mut record = record(0, &[("PatientID", "MRN-1"), ("Age", "70")]);
        assert_eq!(assign_identity(&mut record, 0), "1");
        assert_eq!(record.get("PatientID"), Some("MRN-1"));
    }

    #[test]
    fn atomic_fields_collapse_but_others_keep_merges() {
        let mut record = record(
            0,
            &[
                ("Age", "70"),
                ("Age", "70"),
                ("Insurance", "Medicare | secondary: none"),
                ("Free Text", "a | b"),
            ],
        );
        collapse_atomic_fields(&mut record);
        assert_eq!(record.get("Age"), Some("70"));
        assert_eq!(record.get("Insurance"), Some("Medicare"));
        assert_eq!(record.get("Free Text"), Some("a | b"));
    }

    #[test]
    fn ground_truth_falls_back_to_percent_chance() {
        let mut record = record(0, &[("Percent Chance", "12%")]);
        let entry = split_ground_truth(&mut record, "4").expect("entry");
        assert_eq!(entry.patient_number, "4");
        assert_eq!(entry.true_stroke, "");
        assert_eq!(entry.stroke_risk, "12%");
        assert!(record.is_empty());
    }

    #[test]
    fn ground_truth_omitted_when_both_missing() {
        let mut record = record(0, &[("Age", "70")]);
        assert_eq!(split_ground_truth(&mut record, "1"), None);
    }

    #[test]
    fn derived_text_sees_values_before_cleanup() {
        let records = vec![record(
            7,
            &[
                ("Suden Onset Vertigo", "yes"),
                ("Suden Onset Vertigo", "abrupt onset"),
                ("Smoker?", "1"),
                ("Smoker?", "former smoker"),
                ("True Stroke?", "No"),
            ],
        )];
        let workbook = finalize_records(records, &NarrativeFallbacks::default());
        let patient = &workbook.patients[0];
        assert_eq!(patient.symptoms, "yes | abrupt onset");
        assert!(patient.note.contains("of: no documented diabetes, former smoker,"));
        assert_eq!(patient.field(Field::SuddenOnsetVertigo), Some("yes"));
        assert_eq!(patient.field(Field::Smoker), Some("1"));
        assert_eq!(patient.field(Field::TrueStroke), None);
        assert_eq!(patient.original_row_index, 7);
        assert_eq!(workbook.ground_truth.len(), 1);
    }

    #[test]
    fn ground_truth_links_to_patient_position() {
        let records = vec![
            record(0, &[("Patient#", "7"), ("Age", "70")]),
            record(1, &[("Patient#", "7"), ("True Stroke?", "Yes")]),
        ];
        let workbook = finalize_records(records, &NarrativeFallbacks::default());
        assert_eq!(workbook.ground_truth.len(), 1);
        assert!(workbook.ground_truth_at(0).is_none());
        assert_eq!(
            workbook.ground_truth_at(1).map(|entry| entry.true_stroke.as_str()),
            Some("Yes")
        );
    }

    #[test]
    fn percent_chance_never_stays_on_patient() {
        let mut source = record(0, &[("Age", "70")]);
        source.set_field(Field::StrokeRisk, "30%");
        source.set_field(Field::PercentChance, "25%");
        let workbook = finalize_records(vec![source], &NarrativeFallbacks::default());
        let patient = &workbook.patients[0];
        assert_eq!(patient.field(Field::PercentChance), None);
        assert_eq!(patient.field(Field::Age), Some("70"));
        assert_eq!(workbook.ground_truth[0].stroke_risk, "30%");
    }

    #[test]
    fn reserved_source_columns_are_replaced() {
        let records = vec![record(0, &[("Note", "from sheet"), ("patient_id", "x")])];
        let workbook = finalize_records(records, &NarrativeFallbacks::default());
        let patient = &workbook.patients[0];
        assert_eq!(patient.patient_id, "1");
        assert!(patient.note.starts_with("[Patient 1]"));
        assert_eq!(patient.get("Note"), None);
    }
}
