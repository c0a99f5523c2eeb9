//! Label validation pipeline.
//!
//! expected fields -> per-field comparison -> overall status. Runs once per
//! submission and again, status-only, after specialist review.

use serde::Serialize;
use tracing::{debug, info};

use crate::models::beverage::BeverageType;
use crate::models::field::FieldName;
use crate::models::label::{
    ApplicationData, BoundingBox, ComparisonVerdict, ExtractedField, ReviewOverride,
    VerdictStatus, VerdictSummary,
};
use crate::models::status::StatusDecision;
use crate::services::beverage_config;
use crate::services::comparison::compare_field;
use crate::services::expected_fields::build_expected_fields;
use crate::services::status::determine_overall_status;
use crate::services::strictness::StrictnessPolicy;

/// Everything needed to validate one submission.
#[derive(Debug, Clone, Copy)]
pub struct ValidationInput<'a> {
    pub application: &'a ApplicationData,
    pub beverage_type: BeverageType,
    pub extracted: &'a [ExtractedField],
    pub strictness: &'a StrictnessPolicy,
}

/// One review row: the verdict plus where the extractor found the value.
#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    #[serde(flatten)]
    pub verdict: ComparisonVerdict,
    /// Required on every label of this beverage type.
    pub mandatory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutcome {
    pub beverage_type: BeverageType,
    pub field_results: Vec<FieldReport>,
    pub decision: StatusDecision,
    /// Mean verdict confidence (0-100).
    pub confidence_score: f64,
    /// Fields whose verdict is anything but a match.
    pub flagged_fields: usize,
}

impl ValidationOutcome {
    pub fn summaries(&self) -> Vec<VerdictSummary> {
        self.field_results
            .iter()
            .map(|report| VerdictSummary::from(&report.verdict))
            .collect()
    }
}

/// Validate extracted label values against the application.
pub fn validate_label(input: ValidationInput<'_>) -> ValidationOutcome {
    let config = beverage_config::get_config(input.beverage_type);
    let mut field_results: Vec<FieldReport> =
        build_expected_fields(input.application, input.beverage_type)
            .into_iter()
            .map(|expected| {
                let found = best_extraction(input.extracted, expected.field_name);
                let verdict = compare_field(
                    expected.field_name,
                    &expected.expected_value,
                    found.and_then(|f| f.value.as_deref()),
                    input.strictness.level_for(expected.field_name),
                );
                FieldReport {
                    verdict,
                    mandatory: config.is_mandatory(expected.field_name),
                    extraction_confidence: found.map(|f| f.confidence),
                    bounding_box: found.and_then(|f| f.bounding_box),
                }
            })
            .collect();

    if let Some(size) = input.application.container_size_ml {
        field_results.push(FieldReport {
            verdict: standards_of_fill_verdict(input.beverage_type, size),
            mandatory: false,
            extraction_confidence: None,
            bounding_box: None,
        });
    }

    for report in &field_results {
        let verdict = &report.verdict;
        debug!(
            field = %verdict.field_name,
            status = %verdict.status,
            confidence = verdict.confidence,
            reasoning = %verdict.reasoning,
            "Field compared"
        );
        metrics::counter!(
            "field_verdicts_total",
            "field" => verdict.field_name.to_string(),
            "status" => verdict.status.to_string()
        )
        .increment(1);
    }

    let summaries: Vec<VerdictSummary> = field_results
        .iter()
        .map(|report| VerdictSummary::from(&report.verdict))
        .collect();
    let decision = determine_overall_status(
        &summaries,
        input.beverage_type,
        input.application.container_size_ml,
    );

    let flagged_fields = summaries
        .iter()
        .filter(|s| s.status != VerdictStatus::Match)
        .count();
    let confidence_score = if field_results.is_empty() {
        0.0
    } else {
        field_results
            .iter()
            .map(|r| f64::from(r.verdict.confidence))
            .sum::<f64>()
            / field_results.len() as f64
    };

    info!(
        beverage_type = %input.beverage_type,
        status = %decision.status,
        rule = decision.rule,
        fields_checked = field_results.len(),
        flagged_fields,
        "Label validation complete"
    );
    metrics::counter!("label_validations_total", "status" => decision.status.to_string())
        .increment(1);

    ValidationOutcome {
        beverage_type: input.beverage_type,
        field_results,
        decision,
        confidence_score,
        flagged_fields,
    }
}

/// Review row for the container-size check.
pub fn standards_of_fill_verdict(beverage_type: BeverageType, size_ml: u32) -> ComparisonVerdict {
    let config = beverage_config::get_config(beverage_type);
    let valid = beverage_config::is_valid_size(beverage_type, size_ml);
    let reasoning = match (valid, config.valid_sizes_ml) {
        (_, None) => format!("{} has no standards of fill", config.label),
        (true, Some(_)) => format!("{size_ml} mL is an authorized {} fill", config.label),
        (false, Some(_)) => format!("{size_ml} mL is not an authorized {} fill", config.label),
    };

    ComparisonVerdict {
        field_name: FieldName::StandardsOfFill,
        expected_value: format!("Authorized {} standard of fill", config.label),
        extracted_value: Some(format!("{size_ml} mL")),
        status: if valid {
            VerdictStatus::Match
        } else {
            VerdictStatus::Mismatch
        },
        confidence: if valid { 100 } else { 0 },
        reasoning,
    }
}

/// Replace verdict statuses with the specialist's decisions.
///
/// An override applies to every verdict for its field; overrides naming a
/// field that was never checked are ignored.
pub fn apply_overrides(
    verdicts: &[VerdictSummary],
    overrides: &[ReviewOverride],
) -> Vec<VerdictSummary> {
    verdicts
        .iter()
        .map(|verdict| {
            let status = overrides
                .iter()
                .rev()
                .find(|o| o.field_name == verdict.field_name)
                .map_or(verdict.status, |o| o.status);
            VerdictSummary {
                field_name: verdict.field_name,
                status,
            }
        })
        .collect()
}

/// Recompute the label status after review. The container size is not
/// re-checked.
pub fn reevaluate(
    verdicts: &[VerdictSummary],
    overrides: &[ReviewOverride],
    beverage_type: BeverageType,
) -> StatusDecision {
    let resolved = apply_overrides(verdicts, overrides);
    let decision = determine_overall_status(&resolved, beverage_type, None);

    info!(
        beverage_type = %beverage_type,
        overrides = overrides.len(),
        status = %decision.status,
        rule = decision.rule,
        "Label status re-evaluated after review"
    );
    metrics::counter!("label_reevaluations_total", "status" => decision.status.to_string())
        .increment(1);

    decision
}

/// The most confident non-blank extraction for `field`.
fn best_extraction(extracted: &[ExtractedField], field: FieldName) -> Option<&ExtractedField> {
    extracted
        .iter()
        .filter(|f| f.field_name == field)
        .filter(|f| f.value.as_deref().is_some_and(|v| !v.trim().is_empty()))
        .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
}
