use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::field::Field;

/// Separator placed between values merged under the same label.
pub const SEGMENT_SEPARATOR: &str = " | ";

/// Keys owned by finalization; source columns with these names are overwritten.
pub const RESERVED_KEYS: [&str; 4] = ["patient_id", "originalRowIndex", "Symptoms", "Note"];

/// A patient record under assembly.
///
/// Values are never empty: [`Record::append`] ignores empty input, so a
/// present key always carries content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    /// Row position (row-wise) or patient column position (transposed).
    pub row_index: usize,
    values: BTreeMap<String, String>,
}

impl Record {
    pub fn new(row_index: usize) -> Self {
        Self {
            row_index,
            values: BTreeMap::new(),
        }
    }

    /// Adds a value under `label`, joining onto any existing value with
    /// [`SEGMENT_SEPARATOR`].
    pub fn append(&mut self, label: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        match self.values.get_mut(label) {
            Some(existing) if !existing.is_empty() => {
                existing.push_str(SEGMENT_SEPARATOR);
                existing.push_str(value);
            }
            Some(existing) => value.clone_into(existing),
            None => {
                self.values.insert(label.to_string(), value.to_string());
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.values.get(label).map(String::as_str)
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        self.get(field.as_str())
    }

    pub fn set(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.values.insert(label.into(), value.into());
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.set(field.as_str(), value);
    }

    /// Sets `label` only when the record has no value for it yet.
    pub fn set_if_absent(&mut self, label: &str, value: &str) {
        self.values
            .entry(label.to_string())
            .or_insert_with(|| value.to_string());
    }

    pub fn set_field_if_absent(&mut self, field: Field, value: &str) {
        self.set_if_absent(field.as_str(), value);
    }

    pub fn remove(&mut self, label: &str) -> Option<String> {
        self.values.remove(label)
    }

    pub fn take_field(&mut self, field: Field) -> Option<String> {
        self.remove(field.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_values(self) -> BTreeMap<String, String> {
        self.values
    }
}

/// A finalized patient record as handed to the agent.
///
/// Serializes as a flat JSON object: every canonical field plus
/// `patient_id`, `originalRowIndex`, `Symptoms` and `Note`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRecord {
    pub patient_id: String,
    pub original_row_index: usize,
    pub symptoms: String,
    pub note: String,
    /// Canonical fields. Never contains `True Stroke?`, `Stroke Risk` or a
    /// reserved key.
    pub fields: BTreeMap<String, String>,
}

impl PatientRecord {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.get(label).map(String::as_str)
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        self.get(field.as_str())
    }

    /// True when the flattened record would expose `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        RESERVED_KEYS.contains(&key) || self.fields.contains_key(key)
    }
}

impl Serialize for PatientRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + RESERVED_KEYS.len()))?;
        for (key, value) in &self.fields {
            if RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("patient_id", &self.patient_id)?;
        map.serialize_entry("originalRowIndex", &self.original_row_index)?;
        map.serialize_entry("Symptoms", &self.symptoms)?;
        map.serialize_entry("Note", &self.note)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroundTruthEntry {
    /// Position of the owning patient in [`NormalizedWorkbook::patients`].
    /// Patient numbers may repeat, so this is the reliable link.
    #[serde(skip)]
    pub patient_index: usize,
    #[serde(rename = "Patient#")]
    pub patient_number: String,
    #[serde(rename = "True Stroke?")]
    pub true_stroke: String,
    #[serde(rename = "Stroke Risk")]
    pub stroke_risk: String,
}

/// Output of one normalization pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NormalizedWorkbook {
    pub patients: Vec<PatientRecord>,
    #[serde(rename = "groundTruth")]
    pub ground_truth: Vec<GroundTruthEntry>,
}

impl NormalizedWorkbook {
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Ground truth of the patient at `patient_index`, if it had any.
    pub fn ground_truth_at(&self, patient_index: usize) -> Option<&GroundTruthEntry> {
        self.ground_truth
            .iter()
            .find(|entry| entry.patient_index == patient_index)
    }
}
