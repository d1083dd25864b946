//! Column and row label normalization.

use triage_model::Field;

/// Spreadsheet export prefix for header cells that were left blank.
const UNNAMED_PREFIX: &str = "unnamed:";

/// Table-structure headings that never name a data field.
const SECTION_LABELS: [&str; 8] = [
    "history",
    "hpi",
    "medical history",
    "exam",
    "type",
    "percent chance",
    "true stroke? percent chance type",
    "rt risk%",
];

/// Lowercase synonyms and their canonical field.
const LABEL_ALIASES: [(&str, Field); 6] = [
    ("sudden onset vertigo", Field::SuddenOnsetVertigo),
    ("skew deviation?", Field::SkewDeviation),
    ("skew deviation", Field::SkewDeviation),
    ("true stroke", Field::TrueStroke),
    ("true stroke?", Field::TrueStroke),
    ("stroke risk", Field::StrokeRisk),
];

/// Maps a raw label to its canonical form, or `None` when the label is noise.
///
/// Unrecognized labels pass through trimmed but otherwise unchanged.
pub fn normalize_label(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    let lower = text.to_lowercase();
    if lower.starts_with(UNNAMED_PREFIX) {
        return None;
    }
    if SECTION_LABELS.contains(&lower.as_str()) {
        return None;
    }
    if is_index_token(text) {
        return None;
    }
    let canonical = LABEL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map_or(text, |(_, field)| field.as_str());
    Some(canonical.to_string())
}

/// Bare numbers such as `3` or `12.5` are stray index labels.
fn is_index_token(text: &str) -> bool {
    let without_point = text.replacen('.', "", 1);
    is_all_digits(text) || is_all_digits(&without_point)
}

fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| ch.is_ascii_digit())
}
