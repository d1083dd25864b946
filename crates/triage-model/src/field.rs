//! Canonical field vocabulary for patient workbooks.
//!
//! The serialized names are fixed by downstream consumers and keep the
//! spelling of the source workbook, including `Suden Onset Vertigo` and
//! `Skew Devaition?`.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Field {
    #[serde(rename = "Patient#")]
    PatientNumber,
    Age,
    Race,
    Sex,
    Insurance,
    #[serde(rename = "Suden Onset Vertigo")]
    SuddenOnsetVertigo,
    #[serde(rename = "Positional Vertigo")]
    PositionalVertigo,
    #[serde(rename = "Dizziness that is reproducible with standing")]
    StandingDizziness,
    #[serde(rename = "BMI")]
    Bmi,
    #[serde(rename = "Years of Diabetes")]
    YearsOfDiabetes,
    #[serde(rename = "Atrial Fibrillation?")]
    AtrialFibrillation,
    #[serde(rename = "Smoker?")]
    Smoker,
    #[serde(rename = "Prior Stroke?")]
    PriorStroke,
    #[serde(rename = "Ataxia on finger-nose-finger?")]
    Ataxia,
    #[serde(rename = "Direction-changing nystagmus?")]
    Nystagmus,
    #[serde(rename = "Skew Devaition?")]
    SkewDeviation,
    #[serde(rename = "Head Impulse Test?")]
    HeadImpulse,
    #[serde(rename = "True Stroke?")]
    TrueStroke,
    #[serde(rename = "Stroke Risk")]
    StrokeRisk,
    #[serde(rename = "Percent Chance")]
    PercentChance,
}

/// Vertigo and dizziness fields, in the order they appear in symptom summaries.
pub const SYMPTOM_FIELDS: [Field; 3] = [
    Field::SuddenOnsetVertigo,
    Field::PositionalVertigo,
    Field::StandingDizziness,
];

/// Fields that hold one atomic value; merged duplicates collapse to the first.
pub const SINGLE_SEGMENT_FIELDS: [Field; 16] = [
    Field::Age,
    Field::Race,
    Field::Sex,
    Field::Insurance,
    Field::SuddenOnsetVertigo,
    Field::PositionalVertigo,
    Field::StandingDizziness,
    Field::Bmi,
    Field::YearsOfDiabetes,
    Field::AtrialFibrillation,
    Field::Smoker,
    Field::PriorStroke,
    Field::Ataxia,
    Field::Nystagmus,
    Field::SkewDeviation,
    Field::HeadImpulse,
];

impl Field {
    pub const ALL: [Field; 20] = [
        Field::PatientNumber,
        Field::Age,
        Field::Race,
        Field::Sex,
        Field::Insurance,
        Field::SuddenOnsetVertigo,
        Field::PositionalVertigo,
        Field::StandingDizziness,
        Field::Bmi,
        Field::YearsOfDiabetes,
        Field::AtrialFibrillation,
        Field::Smoker,
        Field::PriorStroke,
        Field::Ataxia,
        Field::Nystagmus,
        Field::SkewDeviation,
        Field::HeadImpulse,
        Field::TrueStroke,
        Field::StrokeRisk,
        Field::PercentChance,
    ];

    /// The record key used for this field at the serialization boundary.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::PatientNumber => "Patient#",
            Field::Age => "Age",
            Field::Race => "Race",
            Field::Sex => "Sex",
            Field::Insurance => "Insurance",
            Field::SuddenOnsetVertigo => "Suden Onset Vertigo",
            Field::PositionalVertigo => "Positional Vertigo",
            Field::StandingDizziness => "Dizziness that is reproducible with standing",
            Field::Bmi => "BMI",
            Field::YearsOfDiabetes => "Years of Diabetes",
            Field::AtrialFibrillation => "Atrial Fibrillation?",
            Field::Smoker => "Smoker?",
            Field::PriorStroke => "Prior Stroke?",
            Field::Ataxia => "Ataxia on finger-nose-finger?",
            Field::Nystagmus => "Direction-changing nystagmus?",
            Field::SkewDeviation => "Skew Devaition?",
            Field::HeadImpulse => "Head Impulse Test?",
            Field::TrueStroke => "True Stroke?",
            Field::StrokeRisk => "Stroke Risk",
            Field::PercentChance => "Percent Chance",
        }
    }

    /// Resolves an exact canonical key. Matching is case-sensitive.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.as_str() == key)
    }

    /// Ground-truth fields never remain on a finalized patient record.
    pub fn is_ground_truth(self) -> bool {
        matches!(
            self,
            Field::TrueStroke | Field::StrokeRisk | Field::PercentChance
        )
    }

    pub fn is_single_segment(self) -> bool {
        SINGLE_SEGMENT_FIELDS.contains(&self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
