use std::collections::BTreeMap;

use cola_verify::models::beverage::BeverageType;
use cola_verify::models::field::{FieldName, StrictnessLevel};
use cola_verify::models::label::{ApplicationData, ExtractedField, VerdictStatus, VerdictSummary};
use cola_verify::models::status::OverallStatus;
use cola_verify::services::comparison::{compare_field, MANDATED_HEALTH_WARNING};
use cola_verify::services::status::determine_overall_status;
use cola_verify::services::strictness::StrictnessPolicy;
use cola_verify::services::validation::{validate_label, ValidationInput};
use strum::IntoEnumIterator;

const ALL_LEVELS: [StrictnessLevel; 3] = [
    StrictnessLevel::Strict,
    StrictnessLevel::Moderate,
    StrictnessLevel::Lenient,
];

fn verdict(field_name: FieldName, status: VerdictStatus) -> VerdictSummary {
    VerdictSummary { field_name, status }
}

fn extracted(field_name: FieldName, value: &str) -> ExtractedField {
    ExtractedField {
        field_name,
        value: Some(value.to_string()),
        confidence: 0.95,
        bounding_box: None,
    }
}

fn all_moderate() -> StrictnessPolicy {
    let levels: BTreeMap<FieldName, StrictnessLevel> = FieldName::iter()
        .map(|field| (field, StrictnessLevel::Moderate))
        .collect();
    StrictnessPolicy::default().with_overrides(&levels)
}

// ── Field comparator ─────────────────────────────────────────────────

#[test]
fn test_compare_is_deterministic() {
    const EXPECTED: &str = "Stone Creek 750 mL 13%";
    const EXTRACTED: &str = "Stone Crest 750ml 13.0%";
    for field in FieldName::iter() {
        for level in ALL_LEVELS {
            let first = compare_field(field, EXPECTED, Some(EXTRACTED), level);
            let second = compare_field(field, EXPECTED, Some(EXTRACTED), level);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_missing_value_is_always_not_found() {
    for field in FieldName::iter() {
        for level in ALL_LEVELS {
            for missing in [None, Some(""), Some("  \t ")] {
                let verdict = compare_field(field, "anything", missing, level);
                assert_eq!(verdict.status, VerdictStatus::NotFound, "{field} / {level}");
                assert_eq!(verdict.confidence, 0);
                assert!(verdict.extracted_value.is_none());
            }
        }
    }
}

#[test]
fn test_alcohol_content_numeric_tolerance() {
    for level in ALL_LEVELS {
        let verdict = compare_field(
            FieldName::AlcoholContent,
            "45% ALC/VOL",
            Some("45.0% Alc./Vol."),
            level,
        );
        assert_eq!(verdict.status, VerdictStatus::Match);
        assert!(verdict.confidence >= 85);
    }
}

#[test]
fn test_numeric_fields_never_fuzzy() {
    let verdict = compare_field(
        FieldName::AlcoholContent,
        "45%",
        Some("47%"),
        StrictnessLevel::Lenient,
    );
    assert_eq!(verdict.status, VerdictStatus::Mismatch);

    let verdict = compare_field(
        FieldName::NetContents,
        "750 mL",
        Some("700 mL"),
        StrictnessLevel::Lenient,
    );
    assert_eq!(verdict.status, VerdictStatus::Mismatch);
}

#[test]
fn test_strict_exactness_versus_lenient_containment() {
    let strict = compare_field(
        FieldName::BrandName,
        "Bulleit",
        Some("Bulleit Bourbon"),
        StrictnessLevel::Strict,
    );
    assert_eq!(strict.status, VerdictStatus::Mismatch);

    let lenient = compare_field(
        FieldName::BrandName,
        "Bulleit",
        Some("Bulleit Bourbon"),
        StrictnessLevel::Lenient,
    );
    assert_eq!(lenient.status, VerdictStatus::Match);
}

#[test]
fn test_health_warning_requires_lead_in() {
    let verdict = compare_field(
        FieldName::HealthWarning,
        MANDATED_HEALTH_WARNING,
        Some(
            "Surgeon General warns pregnant women should not drink alcoholic beverages \
             during pregnancy",
        ),
        StrictnessLevel::Lenient,
    );
    assert_eq!(verdict.status, VerdictStatus::Mismatch);
    assert!(verdict.reasoning.contains("government warning"));
}

#[test]
fn test_health_warning_similarity_after_lead_in() {
    let verdict = compare_field(
        FieldName::HealthWarning,
        MANDATED_HEALTH_WARNING,
        Some(MANDATED_HEALTH_WARNING.to_lowercase().as_str()),
        StrictnessLevel::Strict,
    );
    assert_eq!(verdict.status, VerdictStatus::Match);

    // Only the first clause survived extraction.
    let truncated = "GOVERNMENT WARNING: (1) According to the Surgeon General, women should \
not drink alcoholic beverages during pregnancy because of the risk of birth defects.";
    let verdict = compare_field(
        FieldName::HealthWarning,
        MANDATED_HEALTH_WARNING,
        Some(truncated),
        StrictnessLevel::Strict,
    );
    assert_eq!(verdict.status, VerdictStatus::NeedsCorrection);

    let verdict = compare_field(
        FieldName::HealthWarning,
        MANDATED_HEALTH_WARNING,
        Some("Government Warning: drink responsibly"),
        StrictnessLevel::Lenient,
    );
    assert_eq!(verdict.status, VerdictStatus::Mismatch);
}

#[test]
fn test_health_warning_ignores_abbreviated_application_text() {
    let verdict = compare_field(
        FieldName::HealthWarning,
        "GOVERNMENT WARNING",
        Some(MANDATED_HEALTH_WARNING),
        StrictnessLevel::Moderate,
    );
    assert_eq!(verdict.status, VerdictStatus::Match);
    assert_eq!(verdict.expected_value, "GOVERNMENT WARNING");
}

// ── Overall status resolver ──────────────────────────────────────────

#[test]
fn test_bad_fill_size_rejects_all_match_label() {
    let verdicts = vec![
        verdict(FieldName::BrandName, VerdictStatus::Match),
        verdict(FieldName::AlcoholContent, VerdictStatus::Match),
        verdict(FieldName::NetContents, VerdictStatus::Match),
    ];
    let decision = determine_overall_status(&verdicts, BeverageType::Wine, Some(1750));
    assert_eq!(decision.status, OverallStatus::Rejected);
    assert_eq!(decision.deadline_days, None);

    let decision = determine_overall_status(&verdicts, BeverageType::Wine, Some(750));
    assert_eq!(decision.status, OverallStatus::Approved);
}

#[test]
fn test_critical_mismatch_dominates_minor_corrections() {
    let verdicts = vec![
        verdict(FieldName::BrandName, VerdictStatus::Mismatch),
        verdict(FieldName::FancifulName, VerdictStatus::NeedsCorrection),
        verdict(FieldName::FancifulName, VerdictStatus::NeedsCorrection),
        verdict(FieldName::CountryOfOrigin, VerdictStatus::NeedsCorrection),
    ];
    let decision = determine_overall_status(&verdicts, BeverageType::DistilledSpirits, None);
    assert_eq!(decision.status, OverallStatus::Rejected);
}

#[test]
fn test_non_critical_mismatch_needs_correction() {
    let verdicts = vec![
        verdict(FieldName::ClassType, VerdictStatus::Mismatch),
        verdict(FieldName::BrandName, VerdictStatus::Match),
    ];
    let decision = determine_overall_status(&verdicts, BeverageType::DistilledSpirits, None);
    assert_eq!(decision.status, OverallStatus::NeedsCorrection);
    assert_eq!(decision.deadline_days, Some(30));
}

#[test]
fn test_conditional_approval_only_for_minor_fields() {
    let verdicts = vec![
        verdict(FieldName::BrandName, VerdictStatus::Match),
        verdict(FieldName::NameAndAddress, VerdictStatus::NeedsCorrection),
    ];
    let decision = determine_overall_status(&verdicts, BeverageType::Wine, None);
    assert_eq!(decision.status, OverallStatus::ConditionallyApproved);
    assert_eq!(decision.deadline_days, Some(7));

    let verdicts = vec![
        verdict(FieldName::BrandName, VerdictStatus::Match),
        verdict(FieldName::NetContents, VerdictStatus::NeedsCorrection),
    ];
    let decision = determine_overall_status(&verdicts, BeverageType::Wine, None);
    assert_eq!(decision.status, OverallStatus::NeedsCorrection);
    assert_eq!(decision.deadline_days, Some(30));
}

#[test]
fn test_empty_verdicts_are_approved() {
    for beverage_type in BeverageType::iter() {
        let decision = determine_overall_status(&[], beverage_type, None);
        assert_eq!(decision.status, OverallStatus::Approved);
        assert_eq!(decision.deadline_days, None);
    }
}

// ── End to end ───────────────────────────────────────────────────────

#[test]
fn test_wine_submission_approved() {
    let application = ApplicationData {
        brand_name: Some("Cooper Ridge".to_string()),
        alcohol_content: Some("Alc. 13% by Vol.".to_string()),
        net_contents: Some("750 ml".to_string()),
        ..Default::default()
    };
    let records = vec![
        extracted(FieldName::BrandName, "Cooper Ridge"),
        extracted(FieldName::AlcoholContent, "13.0%"),
        extracted(FieldName::NetContents, "750 mL"),
    ];
    let policy = all_moderate();

    let outcome = validate_label(ValidationInput {
        application: &application,
        beverage_type: BeverageType::Wine,
        extracted: &records,
        strictness: &policy,
    });

    assert_eq!(outcome.field_results.len(), 3);
    assert!(outcome
        .field_results
        .iter()
        .all(|r| r.verdict.status == VerdictStatus::Match));
    assert_eq!(outcome.decision.status, OverallStatus::Approved);
    assert_eq!(outcome.decision.deadline_days, None);
    assert_eq!(outcome.flagged_fields, 0);
}

#[test]
fn test_spirits_abv_mismatch_rejected() {
    let application = ApplicationData {
        alcohol_content: Some("57% ALC/VOL 114 PROOF".to_string()),
        ..Default::default()
    };
    let records = vec![extracted(FieldName::AlcoholContent, "45% ALC/VOL")];
    let policy = StrictnessPolicy::default();

    let outcome = validate_label(ValidationInput {
        application: &application,
        beverage_type: BeverageType::DistilledSpirits,
        extracted: &records,
        strictness: &policy,
    });

    assert_eq!(outcome.field_results[0].verdict.status, VerdictStatus::Mismatch);
    assert_eq!(outcome.decision.status, OverallStatus::Rejected);
    assert_eq!(outcome.decision.rule, "critical_field_mismatch");
}

#[test]
fn test_review_rerun_matches_resolver_ranking() {
    let application = ApplicationData {
        brand_name: Some("Cooper Ridge".to_string()),
        fanciful_name: Some("Old Vine Reserve".to_string()),
        ..Default::default()
    };
    let records = vec![
        extracted(FieldName::BrandName, "Cooper Rdige"),
        extracted(FieldName::FancifulName, "Old Vine Reserve"),
    ];
    let policy = StrictnessPolicy::default();
    let outcome = validate_label(ValidationInput {
        application: &application,
        beverage_type: BeverageType::Wine,
        extracted: &records,
        strictness: &policy,
    });
    assert_eq!(outcome.decision.status, OverallStatus::Rejected);

    let overrides = vec![cola_verify::models::label::ReviewOverride {
        field_name: FieldName::BrandName,
        status: VerdictStatus::Match,
    }];
    let decision = cola_verify::services::validation::reevaluate(
        &outcome.summaries(),
        &overrides,
        BeverageType::Wine,
    );
    assert_eq!(decision.status, OverallStatus::Approved);
}
