//! Field comparator.
//!
//! Scores one expected application value against the value read from the
//! label. Numeric fields compare as physical quantities and ignore strictness;
//! text fields dispatch on the configured [`StrictnessLevel`].

use std::collections::HashSet;

use strsim::sorensen_dice;

use crate::models::field::{FieldName, StrictnessLevel};
use crate::models::label::{ComparisonVerdict, VerdictStatus};
use crate::services::normalize::{
    self, has_sulfite_declaration, normalize_health_warning, normalize_text,
    NormalizationStrategy, NormalizedValue,
};

/// Bigram similarity at or above which text is a match.
pub const MATCH_THRESHOLD: f64 = 0.80;

/// Bigram similarity at or above which a non-match is flagged for review
/// instead of failing outright.
pub const NEEDS_CORRECTION_THRESHOLD: f64 = 0.55;

/// Share of the shorter text's words that must appear in the other text for
/// a lenient match.
pub const WORD_OVERLAP_THRESHOLD: f64 = 0.60;

/// Absolute ABV tolerance in percentage points.
pub const ABV_TOLERANCE: f64 = 0.05;

/// Floor for the confidence of an exact numeric match.
pub const NUMERIC_MATCH_MIN_CONFIDENCE: u8 = 85;

/// Mandated lead-in of the health warning statement (27 CFR 16.21).
pub const HEALTH_WARNING_LEAD_IN: &str = "government warning";

/// Full health warning statement required by 27 CFR 16.21.
pub const MANDATED_HEALTH_WARNING: &str = "GOVERNMENT WARNING: (1) According to the Surgeon \
    General, women should not drink alcoholic beverages during pregnancy because of the risk of \
    birth defects. (2) Consumption of alcoholic beverages impairs your ability to drive a car or \
    operate machinery, and may cause health problems.";

pub const NOT_FOUND_REASONING: &str = "field not detected on label.";

struct Outcome {
    status: VerdictStatus,
    confidence: u8,
    reasoning: String,
}

impl Outcome {
    fn new(status: VerdictStatus, confidence: u8, reasoning: impl Into<String>) -> Self {
        Self {
            status,
            confidence,
            reasoning: reasoning.into(),
        }
    }
}

/// Compare an expected value against an extracted value.
///
/// Missing or blank extracted values are always `not_found` with zero
/// confidence, regardless of field or strictness.
pub fn compare_field(
    field: FieldName,
    expected: &str,
    extracted: Option<&str>,
    strictness: StrictnessLevel,
) -> ComparisonVerdict {
    let extracted = extracted.map(str::trim).filter(|value| !value.is_empty());

    let Some(extracted) = extracted else {
        return ComparisonVerdict {
            field_name: field,
            expected_value: expected.to_string(),
            extracted_value: None,
            status: VerdictStatus::NotFound,
            confidence: 0,
            reasoning: NOT_FOUND_REASONING.to_string(),
        };
    };

    let outcome = match normalize::strategy_for(field) {
        NormalizationStrategy::Text => compare_text(
            &normalize_text(expected),
            &normalize_text(extracted),
            strictness,
        ),
        NormalizationStrategy::HealthWarning => compare_health_warning(expected, extracted),
        NormalizationStrategy::Sulfite => compare_declaration(field, expected, extracted),
        NormalizationStrategy::AlcoholContent
        | NormalizationStrategy::Volume
        | NormalizationStrategy::Year => compare_numeric(field, expected, extracted),
    };

    ComparisonVerdict {
        field_name: field,
        expected_value: expected.to_string(),
        extracted_value: Some(extracted.to_string()),
        status: outcome.status,
        confidence: outcome.confidence,
        reasoning: outcome.reasoning,
    }
}

/// Bigram (Sørensen-Dice) similarity of two already-normalized strings.
pub fn bigram_similarity(a: &str, b: &str) -> f64 {
    sorensen_dice(a, b)
}

/// Share of the shorter text's distinct words that also occur in the other.
pub fn word_overlap(a: &str, b: &str) -> f64 {
    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();
    let shorter = words_a.len().min(words_b.len());
    if shorter == 0 {
        return 0.0;
    }
    words_a.intersection(&words_b).count() as f64 / shorter as f64
}

fn compare_text(expected: &str, extracted: &str, strictness: StrictnessLevel) -> Outcome {
    match strictness {
        StrictnessLevel::Strict => compare_strict(expected, extracted),
        StrictnessLevel::Moderate => compare_moderate(expected, extracted),
        StrictnessLevel::Lenient => compare_lenient(expected, extracted),
    }
}

fn compare_strict(expected: &str, extracted: &str) -> Outcome {
    if expected == extracted {
        Outcome::new(VerdictStatus::Match, 100, "exact match after normalization")
    } else {
        Outcome::new(
            VerdictStatus::Mismatch,
            0,
            "normalized text differs, strict comparison requires an exact match",
        )
    }
}

fn compare_moderate(expected: &str, extracted: &str) -> Outcome {
    let similarity = bigram_similarity(expected, extracted);
    let pct = percent(similarity);

    if similarity >= MATCH_THRESHOLD {
        Outcome::new(
            VerdictStatus::Match,
            pct,
            format!(
                "bigram similarity {pct}%, above {}% threshold",
                percent(MATCH_THRESHOLD)
            ),
        )
    } else if similarity >= NEEDS_CORRECTION_THRESHOLD {
        Outcome::new(
            VerdictStatus::NeedsCorrection,
            pct,
            format!(
                "bigram similarity {pct}%, between {}% and {}%; flagged for review",
                percent(NEEDS_CORRECTION_THRESHOLD),
                percent(MATCH_THRESHOLD)
            ),
        )
    } else {
        Outcome::new(
            VerdictStatus::Mismatch,
            pct,
            format!(
                "bigram similarity {pct}%, below {}% threshold",
                percent(NEEDS_CORRECTION_THRESHOLD)
            ),
        )
    }
}

fn compare_lenient(expected: &str, extracted: &str) -> Outcome {
    let pct = percent(bigram_similarity(expected, extracted));

    let contains = !expected.is_empty()
        && !extracted.is_empty()
        && (expected.contains(extracted) || extracted.contains(expected));
    if contains {
        return Outcome::new(
            VerdictStatus::Match,
            pct,
            format!("one text contains the other (bigram similarity {pct}%)"),
        );
    }

    let overlap = word_overlap(expected, extracted);
    if overlap >= WORD_OVERLAP_THRESHOLD {
        return Outcome::new(
            VerdictStatus::Match,
            pct,
            format!(
                "word overlap {}% of shorter text, above {}% threshold",
                percent(overlap),
                percent(WORD_OVERLAP_THRESHOLD)
            ),
        );
    }

    let fallback = compare_moderate(expected, extracted);
    Outcome {
        reasoning: format!("no containment or word overlap; {}", fallback.reasoning),
        ..fallback
    }
}

/// The lead-in is checked before similarity: a warning without it is never
/// acceptable, whatever the configured strictness. The label is scored against
/// the mandated statement; the application's wording is only reported.
fn compare_health_warning(expected: &str, extracted: &str) -> Outcome {
    let extracted = normalize_health_warning(extracted);
    if !extracted.contains(HEALTH_WARNING_LEAD_IN) {
        return Outcome::new(
            VerdictStatus::Mismatch,
            0,
            format!("mandatory \"{HEALTH_WARNING_LEAD_IN}\" lead-in missing from label text"),
        );
    }

    let mandated = normalize_health_warning(MANDATED_HEALTH_WARNING);
    let outcome = compare_moderate(&mandated, &extracted);
    if normalize_health_warning(expected) == mandated {
        return outcome;
    }
    Outcome {
        reasoning: format!(
            "{} against mandated text; application text differs from mandated wording",
            outcome.reasoning
        ),
        ..outcome
    }
}

fn compare_declaration(field: FieldName, expected: &str, extracted: &str) -> Outcome {
    let want = has_sulfite_declaration(expected);
    let found = has_sulfite_declaration(extracted);

    if want == found {
        Outcome::new(
            VerdictStatus::Match,
            100,
            format!("{} presence agrees ({})", field.label(), presence(found)),
        )
    } else {
        Outcome::new(
            VerdictStatus::Mismatch,
            0,
            format!(
                "{} expected {} but label shows {}",
                field.label(),
                presence(want),
                presence(found)
            ),
        )
    }
}

fn compare_numeric(field: FieldName, expected: &str, extracted: &str) -> Outcome {
    let matched = match (
        normalize::normalize(field, expected),
        normalize::normalize(field, extracted),
    ) {
        (NormalizedValue::Percent(want), NormalizedValue::Percent(found)) => {
            let equal = (want - found).abs() <= ABV_TOLERANCE + f64::EPSILON;
            Some((
                equal,
                format!(
                    "{} {found:.1}% vs expected {want:.1}% (tolerance {ABV_TOLERANCE})",
                    field.label()
                ),
            ))
        }
        (NormalizedValue::Millilitres(want), NormalizedValue::Millilitres(found)) => Some((
            want == found,
            format!("{} {found} mL vs expected {want} mL", field.label()),
        )),
        (NormalizedValue::Year(want), NormalizedValue::Year(found)) => Some((
            want == found,
            format!("{} {found} vs expected {want}", field.label()),
        )),
        _ => None,
    };

    match matched {
        Some((true, detail)) => {
            let closeness =
                bigram_similarity(&normalize_text(expected), &normalize_text(extracted));
            let headroom = f64::from(100 - NUMERIC_MATCH_MIN_CONFIDENCE);
            let confidence = NUMERIC_MATCH_MIN_CONFIDENCE + (headroom * closeness).round() as u8;
            Outcome::new(
                VerdictStatus::Match,
                confidence.min(100),
                format!("numeric match: {detail}"),
            )
        }
        Some((false, detail)) => Outcome::new(
            VerdictStatus::Mismatch,
            0,
            format!("numeric mismatch: {detail}"),
        ),
        None => {
            let fallback = compare_strict(&normalize_text(expected), &normalize_text(extracted));
            Outcome {
                reasoning: format!(
                    "could not parse {} as a quantity; {}",
                    field.label(),
                    fallback.reasoning
                ),
                ..fallback
            }
        }
    }
}

fn presence(flag: bool) -> &'static str {
    if flag {
        "declared"
    } else {
        "not declared"
    }
}

fn percent(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}
