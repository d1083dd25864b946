//! Symptom summaries and narrative notes.
//!
//! Both are derived from the merged values of a record, before atomic fields
//! are collapsed to their primary segment, so a note can quote the free-text
//! half of a `code | description` pair.

use std::collections::BTreeMap;

use triage_model::{Field, Record, SYMPTOM_FIELDS};

use crate::value::{narrative_segment, primary_segment};

const SYMPTOM_SEPARATOR: &str = "; ";

const DEFAULT_FALLBACKS: [(Field, &str); 13] = [
    (Field::Age, "unknown"),
    (Field::Race, "patient"),
    (Field::Sex, ""),
    (Field::StandingDizziness, "dizziness"),
    (Field::YearsOfDiabetes, "no documented diabetes"),
    (Field::Smoker, "unknown smoking status"),
    (Field::PriorStroke, "no history of prior stroke"),
    (Field::AtrialFibrillation, "no known atrial fibrillation"),
    (Field::Bmi, "unknown"),
    (Field::Ataxia, "no ataxia noted"),
    (Field::Nystagmus, "no direction changing nystagmus noted"),
    (Field::SkewDeviation, "no skew deviation"),
    (Field::HeadImpulse, "no head impulse findings"),
];

/// Text substituted into a note when a field has no usable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeFallbacks {
    phrases: BTreeMap<Field, String>,
}

impl Default for NarrativeFallbacks {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_FALLBACKS
                .into_iter()
                .map(|(field, phrase)| (field, phrase.to_string()))
                .collect(),
        }
    }
}

impl NarrativeFallbacks {
    /// Replaces the phrase used for `field`.
    #[must_use]
    pub fn with_phrase(mut self, field: Field, phrase: impl Into<String>) -> Self {
        self.phrases.insert(field, phrase.into());
        self
    }

    pub fn phrase(&self, field: Field) -> &str {
        self.phrases.get(&field).map_or("", String::as_str)
    }
}

/// How a note slot reads its field.
#[derive(Debug, Clone, Copy)]
enum Segment {
    Primary,
    Narrative,
}

struct NoteContext<'a> {
    record: &'a Record,
    fallbacks: &'a NarrativeFallbacks,
}

impl<'a> NoteContext<'a> {
    fn slot(&self, field: Field, segment: Segment) -> &'a str {
        let value = self.record.field(field).unwrap_or_default();
        let extracted = match segment {
            Segment::Primary => primary_segment(value),
            Segment::Narrative => narrative_segment(value),
        };
        if extracted.is_empty() {
            self.fallbacks.phrase(field)
        } else {
            extracted
        }
    }
}

/// `"; "`-joined values of the vertigo and dizziness fields, in fixed order.
pub fn symptom_summary(record: &Record) -> String {
    SYMPTOM_FIELDS
        .iter()
        .filter_map(|&field| record.field(field))
        .collect::<Vec<_>>()
        .join(SYMPTOM_SEPARATOR)
}

/// Three-sentence note: presenting history, medical history, bedside exam.
pub fn build_note(record: &Record, patient_id: &str, fallbacks: &NarrativeFallbacks) -> String {
    let ctx = NoteContext { record, fallbacks };

    let age = ctx.slot(Field::Age, Segment::Primary);
    let race = ctx.slot(Field::Race, Segment::Primary);
    let sex = ctx.slot(Field::Sex, Segment::Primary);
    let dizziness = ctx.slot(Field::StandingDizziness, Segment::Narrative);
    let mut history = format!("[Patient {patient_id}] History: A {age} year old {race} {sex}");
    history.truncate(history.trim_end().len());
    history.push_str(&format!(" presents with {dizziness}."));

    let medical_history = format!(
        "They have a past medical history of: {}, {}, {}, {}, and a BMI of {}.",
        ctx.slot(Field::YearsOfDiabetes, Segment::Narrative),
        ctx.slot(Field::Smoker, Segment::Narrative),
        ctx.slot(Field::PriorStroke, Segment::Narrative),
        ctx.slot(Field::AtrialFibrillation, Segment::Narrative),
        ctx.slot(Field::Bmi, Segment::Primary),
    );

    let exam = format!(
        "On bedside exam they have {}, {}, {}, and {}.",
        ctx.slot(Field::Ataxia, Segment::Narrative),
        ctx.slot(Field::Nystagmus, Segment::Narrative),
        ctx.slot(Field::SkewDeviation, Segment::Narrative),
        ctx.slot(Field::HeadImpulse, Segment::Narrative),
    );

    [history, medical_history, exam].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(values: &[(Field, &str)]) -> Record {
        let mut record = Record::new(0);
        for (field, value) in values {
            record.append(field.as_str(), value);
        }
        record
    }

    #[test]
    fn symptom_summary_follows_field_order() {
        let record = record(&[
            (Field::StandingDizziness, "yes | on standing"),
            (Field::SuddenOnsetVertigo, "no"),
        ]);
        assert_eq!(symptom_summary(&record), "no; yes | on standing");
        assert_eq!(symptom_summary(&Record::new(0)), "");
    }

    #[test]
    fn empty_record_uses_every_fallback() {
        let note = build_note(&Record::new(0), "4", &NarrativeFallbacks::default());
        insta::assert_snapshot!(note, @"[Patient 4] History: A unknown year old patient presents with dizziness. They have a past medical history of: no documented diabetes, unknown smoking status, no history of prior stroke, no known atrial fibrillation, and a BMI of unknown. On bedside exam they have no ataxia noted, no direction changing nystagmus noted, no skew deviation, and no head impulse findings.");
    }

    #[test]
    fn note_reads_merged_values() {
        let record = record(&[
            (Field::Age, "68 | sixty-eight"),
            (Field::Race, "White"),
            (Field::Sex, "F"),
            (Field::StandingDizziness, "1 | lightheaded when standing"),
            (Field::Smoker, "yes | 20 pack-years,"),
            (Field::Bmi, "31.2 | obese"),
            (Field::SkewDeviation, "present"),
        ]);
        let note = build_note(&record, "12", &NarrativeFallbacks::default());
        assert!(note.starts_with(
            "[Patient 12] History: A 68 year old White F presents with lightheaded when standing."
        ));
        assert!(!note.contains("unknown smoking status"));
        assert!(note.contains("no documented diabetes, 20 pack-years, no history"));
        assert!(note.contains("and a BMI of 31.2."));
        assert!(note.contains("no direction changing nystagmus noted, present, and"));
    }

    #[test]
    fn comma_only_value_falls_back() {
        let record = record(&[(Field::YearsOfDiabetes, ","), (Field::YearsOfDiabetes, "1")]);
        assert_eq!(record.field(Field::YearsOfDiabetes), Some(", | 1"));
        let note = build_note(&record, "2", &NarrativeFallbacks::default());
        assert!(note.contains("history of: no documented diabetes, unknown smoking status"));
    }

    #[test]
    fn fallbacks_can_be_reworded() {
        let fallbacks = NarrativeFallbacks::default()
            .with_phrase(Field::HeadImpulse, "head impulse not performed");
        let note = build_note(&Record::new(0), "1", &fallbacks);
        assert!(note.ends_with("and head impulse not performed."));
        assert_eq!(fallbacks.phrase(Field::Insurance), "");
    }
}
