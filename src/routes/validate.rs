use axum::extract::State;
use axum::Json;
use chrono::Utc;
use garde::Validate;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::models::verification::{ValidateRequest, ValidateResponse};
use crate::routes::parse_beverage_type;
use crate::services::validation::{validate_label, ValidationInput};

/// POST /api/v1/validate — Score extracted label values against the application.
pub async fn validate_submission(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, ApiError> {
    request.validate()?;
    let beverage_type = parse_beverage_type(&request.beverage_type)?;
    let strictness = state.strictness.with_overrides(&request.strictness);

    let start = std::time::Instant::now();
    let outcome = validate_label(ValidationInput {
        application: &request.application,
        beverage_type,
        extracted: &request.extracted_fields,
        strictness: &strictness,
    });
    metrics::histogram!("label_validation_seconds").record(start.elapsed().as_secs_f64());

    let correction_deadline = outcome.decision.deadline_from(Utc::now());

    Ok(Json(ValidateResponse {
        outcome,
        correction_deadline,
    }))
}
