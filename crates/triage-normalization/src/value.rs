//! Cell value normalization and segment extraction.
//!
//! Every downstream consumer treats the empty string as "absent", so the
//! functions here never fail: missing markers and NaN become `""`.

use triage_model::CellValue;

/// Converts a cell into a trimmed display string.
pub fn normalize_value(value: &CellValue) -> String {
    match value {
        CellValue::Missing => String::new(),
        CellValue::Float(v) if v.is_nan() => String::new(),
        CellValue::Float(v) => format_numeric(*v),
        CellValue::Text(text) => text.trim().to_string(),
        other => other.to_string(),
    }
}

/// Formats a float without a trailing `.0`.
///
/// `f64`'s `Display` already emits the shortest round-trip form, so `75.0`
/// renders as `75` and `27.50` as `27.5`. Magnitudes of `1e16` and above, or
/// below `1e-4`, switch to scientific notation with a signed two-digit
/// exponent (`1e+16`, `1.5e-05`) instead of a long digit string.
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if (1e-4..1e16).contains(&v.abs()) {
        return format!("{v}");
    }
    let scientific = format!("{v:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent
                .strip_prefix('-')
                .map_or(("+", exponent), |digits| ("-", digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => scientific,
    }
}

/// Text before the first `|`, trimmed.
pub fn primary_segment(text: &str) -> &str {
    let text = text.trim();
    match text.split_once('|') {
        Some((head, _)) => head.trim(),
        None => text,
    }
}

/// The most descriptive `|`-delimited segment.
///
/// Blank segments are dropped before edge commas are stripped, so a
/// comma-only segment stays in place as `""`. A single segment is returned as
/// is. With several, the first segment after the leading one that contains a
/// letter wins, which skips a bare code in favour of free text. Falls back to
/// the first segment.
pub fn narrative_segment(text: &str) -> &str {
    let segments: Vec<&str> = text
        .split('|')
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| segment.trim().trim_matches(','))
        .collect();
    match segments.as_slice() {
        [] => "",
        [only] => *only,
        [first, rest @ ..] => rest
            .iter()
            .copied()
            .find(|segment| segment.chars().any(char::is_alphabetic))
            .unwrap_or(*first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_markers_become_empty() {
        assert_eq!(normalize_value(&CellValue::Missing), "");
        assert_eq!(normalize_value(&CellValue::Float(f64::NAN)), "");
        assert_eq!(normalize_value(&CellValue::Text("   ".to_string())), "");
    }

    #[test]
    fn numbers_render_without_trailing_zeros() {
        assert_eq!(normalize_value(&CellValue::Float(75.0)), "75");
        assert_eq!(normalize_value(&CellValue::Float(27.5)), "27.5");
        assert_eq!(normalize_value(&CellValue::Float(-0.0)), "0");
        assert_eq!(normalize_value(&CellValue::Float(100.0)), "100");
        assert_eq!(normalize_value(&CellValue::Integer(-3)), "-3");
        assert_eq!(normalize_value(&CellValue::Bool(true)), "True");
    }

    #[test]
    fn extreme_magnitudes_use_scientific_notation() {
        assert_eq!(format_numeric(1e16), "1e+16");
        assert_eq!(format_numeric(-2.5e20), "-2.5e+20");
        assert_eq!(format_numeric(1.5e-5), "1.5e-05");
        assert_eq!(format_numeric(1e-4), "0.0001");
        assert_eq!(format_numeric(9_999_999_999_999_998.0), "9999999999999998");
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(
            normalize_value(&CellValue::Text("  Hispanic \n".to_string())),
            "Hispanic"
        );
    }

    #[test]
    fn primary_segment_takes_first_chunk() {
        assert_eq!(primary_segment("yes | sudden onset, classic"), "yes");
        assert_eq!(primary_segment("  72 "), "72");
        assert_eq!(primary_segment(""), "");
        assert_eq!(primary_segment("| trailing"), "");
    }

    #[test]
    fn narrative_segment_prefers_descriptive_text() {
        assert_eq!(narrative_segment("1 | smokes half a pack daily,"), "smokes half a pack daily");
        assert_eq!(narrative_segment("no"), "no");
        assert_eq!(narrative_segment("1 | 2"), "1");
        assert_eq!(narrative_segment("yes | 3 | worse on standing"), "worse on standing");
        assert_eq!(narrative_segment("  |  "), "");
    }

    #[test]
    fn comma_only_segment_keeps_its_place() {
        assert_eq!(narrative_segment(", | 1"), "");
        assert_eq!(narrative_segment(", | ,"), "");
        assert_eq!(narrative_segment(" | , | 1"), "");
        assert_eq!(narrative_segment("2 | , | on insulin"), "on insulin");
    }

    #[test]
    fn narrative_segment_skips_only_the_leading_segment() {
        // The first segment is never chosen over a later descriptive one,
        // even when it is descriptive itself.
        assert_eq!(narrative_segment("type 2 | on metformin"), "on metformin");
    }
}
