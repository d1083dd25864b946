use std::collections::BTreeMap;

use serde_json::{Value, json};

use triage_model::{GroundTruthEntry, NormalizedWorkbook, PatientRecord};

fn patient(fields: &[(&str, &str)]) -> PatientRecord {
    PatientRecord {
        patient_id: "1".to_string(),
        original_row_index: 4,
        symptoms: "yes".to_string(),
        note: "[Patient 1] History: A 70 year old patient presents with dizziness.".to_string(),
        fields: fields
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[test]
fn patient_record_serializes_flat() {
    let record = patient(&[("Patient#", "1"), ("PatientID", "1"), ("Age", "70")]);
    let value = serde_json::to_value(&record).expect("serialize patient");
    assert_eq!(
        value,
        json!({
            "Patient#": "1",
            "PatientID": "1",
            "Age": "70",
            "patient_id": "1",
            "originalRowIndex": 4,
            "Symptoms": "yes",
            "Note": "[Patient 1] History: A 70 year old patient presents with dizziness.",
        })
    );
}

#[test]
fn reserved_source_columns_do_not_duplicate_keys() {
    let record = patient(&[("Symptoms", "from the sheet"), ("Note", "free text")]);
    let json = serde_json::to_string(&record).expect("serialize patient");
    assert_eq!(json.matches("\"Symptoms\"").count(), 1);
    assert_eq!(json.matches("\"Note\"").count(), 1);
    let value: Value = serde_json::from_str(&json).expect("parse");
    assert_eq!(value["Symptoms"], "yes");
    assert!(record.contains_key("originalRowIndex"));
}

#[test]
fn workbook_uses_camel_case_ground_truth_key() {
    let workbook = NormalizedWorkbook {
        patients: vec![patient(&[("Patient#", "1")])],
        ground_truth: vec![GroundTruthEntry {
            patient_index: 0,
            patient_number: "1".to_string(),
            true_stroke: "Yes".to_string(),
            stroke_risk: String::new(),
        }],
    };
    let value = serde_json::to_value(&workbook).expect("serialize workbook");
    assert!(value.get("groundTruth").is_some());
    assert!(value.get("ground_truth").is_none());
    assert_eq!(
        value["groundTruth"][0],
        json!({"Patient#": "1", "True Stroke?": "Yes", "Stroke Risk": ""})
    );
    assert_eq!(
        workbook.ground_truth_at(0).map(|e| e.true_stroke.as_str()),
        Some("Yes")
    );
    assert!(workbook.ground_truth_at(1).is_none());
}
