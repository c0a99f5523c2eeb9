use axum::Json;
use chrono::Utc;
use garde::Validate;

use crate::error::ApiError;
use crate::models::verification::{ReevaluateRequest, ReevaluateResponse};
use crate::routes::parse_beverage_type;
use crate::services::validation::reevaluate;

/// POST /api/v1/review/reevaluate — Recompute label status after specialist overrides.
pub async fn reevaluate_status(
    Json(request): Json<ReevaluateRequest>,
) -> Result<Json<ReevaluateResponse>, ApiError> {
    request.validate()?;
    let beverage_type = parse_beverage_type(&request.beverage_type)?;

    let decision = reevaluate(&request.verdicts, &request.overrides, beverage_type);

    Ok(Json(ReevaluateResponse {
        decision,
        correction_deadline: decision.deadline_from(Utc::now()),
    }))
}
