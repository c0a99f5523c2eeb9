use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::models::field::{FieldName, StrictnessLevel};
use crate::models::label::{ApplicationData, ExtractedField, ReviewOverride, VerdictSummary};
use crate::models::status::StatusDecision;
use crate::services::validation::ValidationOutcome;

/// Request to validate extracted label values against an application.
#[derive(Debug, Deserialize, Validate)]
pub struct ValidateRequest {
    /// Beverage type as submitted, e.g. "distilled_spirits".
    #[garde(length(min = 1, max = 50))]
    pub beverage_type: String,

    #[garde(dive)]
    pub application: ApplicationData,

    #[garde(length(max = 200), dive)]
    #[serde(default)]
    pub extracted_fields: Vec<ExtractedField>,

    /// Per-request strictness, layered over the configured policy.
    #[garde(skip)]
    #[serde(default)]
    pub strictness: BTreeMap<FieldName, StrictnessLevel>,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    #[serde(flatten)]
    pub outcome: ValidationOutcome,
    pub correction_deadline: Option<DateTime<Utc>>,
}

/// Request to recompute a label's status after specialist review.
#[derive(Debug, Deserialize, Validate)]
pub struct ReevaluateRequest {
    #[garde(length(min = 1, max = 50))]
    pub beverage_type: String,

    #[garde(length(max = 200))]
    pub verdicts: Vec<VerdictSummary>,

    #[garde(length(max = 200))]
    #[serde(default)]
    pub overrides: Vec<ReviewOverride>,
}

#[derive(Debug, Serialize)]
pub struct ReevaluateResponse {
    pub decision: StatusDecision,
    pub correction_deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct FillQuery {
    pub beverage_type: String,
    pub size_ml: u32,
}

#[derive(Debug, Serialize)]
pub struct FillResponse {
    pub beverage_type: String,
    pub size_ml: u32,
    pub valid: bool,
}
