//! Overall label status resolution.
//!
//! The rules below are evaluated top to bottom and the first one that fires
//! decides the status. Their order is regulatory severity: a non-standard
//! fill beats a critical mismatch, which beats any correction.

use tracing::debug;

use crate::models::beverage::BeverageType;
use crate::models::field::FieldName;
use crate::models::label::{VerdictStatus, VerdictSummary};
use crate::models::status::{OverallStatus, StatusDecision};
use crate::services::beverage_config;

/// Fields whose mismatch forces rejection.
pub const CRITICAL_FIELDS: &[FieldName] = &[
    FieldName::BrandName,
    FieldName::AlcoholContent,
    FieldName::HealthWarning,
];

/// Fields whose `needs_correction` verdicts alone only earn a conditional approval.
pub const MINOR_DISCREPANCY_FIELDS: &[FieldName] = &[
    FieldName::FancifulName,
    FieldName::QualifyingPhrase,
    FieldName::CountryOfOrigin,
    FieldName::GrapeVarietal,
    FieldName::AppellationOfOrigin,
    FieldName::NameAndAddress,
    FieldName::StateOfDistillation,
    FieldName::AgeStatement,
];

/// Rule name reported when every verdict matches.
pub const ALL_FIELDS_MATCH: &str = "all_fields_match";

/// Inputs the rules are evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct StatusContext<'a> {
    pub verdicts: &'a [VerdictSummary],
    pub beverage_type: BeverageType,
    /// Only known at initial validation; re-evaluation after review passes `None`.
    pub container_size_ml: Option<u32>,
}

impl StatusContext<'_> {
    fn any(&self, status: VerdictStatus) -> bool {
        self.verdicts.iter().any(|v| v.status == status)
    }
}

pub struct StatusRule {
    pub name: &'static str,
    pub applies: fn(&StatusContext<'_>) -> bool,
    pub status: OverallStatus,
}

/// Status rules in precedence order.
pub static STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        name: "invalid_standard_of_fill",
        applies: invalid_standard_of_fill,
        status: OverallStatus::Rejected,
    },
    StatusRule {
        name: "critical_field_mismatch",
        applies: critical_field_mismatch,
        status: OverallStatus::Rejected,
    },
    StatusRule {
        name: "field_mismatch",
        applies: field_mismatch,
        status: OverallStatus::NeedsCorrection,
    },
    StatusRule {
        name: "field_not_found",
        applies: field_not_found,
        status: OverallStatus::NeedsCorrection,
    },
    StatusRule {
        name: "minor_discrepancy",
        applies: minor_discrepancy,
        status: OverallStatus::ConditionallyApproved,
    },
    StatusRule {
        name: "needs_correction",
        applies: needs_correction,
        status: OverallStatus::NeedsCorrection,
    },
];

/// Aggregate per-field verdicts into one label status and deadline.
///
/// An empty verdict list is approved.
pub fn determine_overall_status(
    verdicts: &[VerdictSummary],
    beverage_type: BeverageType,
    container_size_ml: Option<u32>,
) -> StatusDecision {
    let ctx = StatusContext {
        verdicts,
        beverage_type,
        container_size_ml,
    };

    let decision = STATUS_RULES
        .iter()
        .find(|rule| (rule.applies)(&ctx))
        .map(|rule| StatusDecision::new(rule.status, rule.name))
        .unwrap_or_else(|| StatusDecision::new(OverallStatus::Approved, ALL_FIELDS_MATCH));

    debug!(
        beverage_type = %beverage_type,
        verdicts = verdicts.len(),
        rule = decision.rule,
        status = %decision.status,
        "Resolved overall label status"
    );

    decision
}

pub fn is_critical(field: FieldName) -> bool {
    CRITICAL_FIELDS.contains(&field)
}

pub fn is_minor_discrepancy(field: FieldName) -> bool {
    MINOR_DISCREPANCY_FIELDS.contains(&field)
}

fn invalid_standard_of_fill(ctx: &StatusContext<'_>) -> bool {
    ctx.container_size_ml
        .is_some_and(|size| !beverage_config::is_valid_size(ctx.beverage_type, size))
}

fn critical_field_mismatch(ctx: &StatusContext<'_>) -> bool {
    ctx.verdicts
        .iter()
        .any(|v| v.status == VerdictStatus::Mismatch && is_critical(v.field_name))
}

fn field_mismatch(ctx: &StatusContext<'_>) -> bool {
    ctx.any(VerdictStatus::Mismatch)
}

fn field_not_found(ctx: &StatusContext<'_>) -> bool {
    ctx.any(VerdictStatus::NotFound)
}

fn minor_discrepancy(ctx: &StatusContext<'_>) -> bool {
    let mut flagged = ctx
        .verdicts
        .iter()
        .filter(|v| v.status == VerdictStatus::NeedsCorrection)
        .peekable();
    flagged.peek().is_some() && flagged.all(|v| is_minor_discrepancy(v.field_name))
}

fn needs_correction(ctx: &StatusContext<'_>) -> bool {
    ctx.any(VerdictStatus::NeedsCorrection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(field_name: FieldName, status: VerdictStatus) -> VerdictSummary {
        VerdictSummary { field_name, status }
    }

    fn rule_fired(verdicts: &[VerdictSummary], size: Option<u32>) -> &'static str {
        determine_overall_status(verdicts, BeverageType::DistilledSpirits, size).rule
    }

    #[test]
    fn test_each_rule_in_isolation() {
        use FieldName::*;
        use VerdictStatus::*;

        assert_eq!(rule_fired(&[], Some(740)), "invalid_standard_of_fill");
        assert_eq!(
            rule_fired(&[verdict(HealthWarning, Mismatch)], None),
            "critical_field_mismatch"
        );
        assert_eq!(rule_fired(&[verdict(ClassType, Mismatch)], None), "field_mismatch");
        assert_eq!(rule_fired(&[verdict(ClassType, NotFound)], None), "field_not_found");
        assert_eq!(
            rule_fired(&[verdict(AgeStatement, NeedsCorrection)], None),
            "minor_discrepancy"
        );
        assert_eq!(rule_fired(&[verdict(ClassType, NeedsCorrection)], None), "needs_correction");
        assert_eq!(rule_fired(&[verdict(ClassType, Match)], Some(750)), ALL_FIELDS_MATCH);
    }

    #[test]
    fn test_rules_are_ordered_by_severity() {
        let names: Vec<&str> = STATUS_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "invalid_standard_of_fill",
                "critical_field_mismatch",
                "field_mismatch",
                "field_not_found",
                "minor_discrepancy",
                "needs_correction",
            ]
        );
    }

    #[test]
    fn test_not_found_on_critical_field_is_correction() {
        let decision = determine_overall_status(
            &[verdict(FieldName::BrandName, VerdictStatus::NotFound)],
            BeverageType::Wine,
            None,
        );
        assert_eq!(decision.status, OverallStatus::NeedsCorrection);
        assert_eq!(decision.deadline_days, Some(30));
    }

    #[test]
    fn test_mixed_minor_and_major_corrections() {
        let decision = determine_overall_status(
            &[
                verdict(FieldName::FancifulName, VerdictStatus::NeedsCorrection),
                verdict(FieldName::ClassType, VerdictStatus::NeedsCorrection),
            ],
            BeverageType::Wine,
            None,
        );
        assert_eq!(decision.status, OverallStatus::NeedsCorrection);
    }

    #[test]
    fn test_malt_beverage_skips_fill_check() {
        let decision = determine_overall_status(
            &[verdict(FieldName::BrandName, VerdictStatus::Match)],
            BeverageType::MaltBeverage,
            Some(12_345),
        );
        assert_eq!(decision.status, OverallStatus::Approved);
        assert_eq!(decision.deadline_days, None);
    }
}
