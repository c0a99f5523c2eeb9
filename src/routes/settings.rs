use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::models::field::{FieldName, StrictnessLevel};
use crate::models::verification::{FillQuery, FillResponse};
use crate::routes::parse_beverage_type;
use crate::services::beverage_config;

/// GET /api/v1/settings/strictness — Effective per-field strictness.
pub async fn strictness_settings(
    State(state): State<AppState>,
) -> Json<BTreeMap<FieldName, StrictnessLevel>> {
    Json(state.strictness.levels().clone())
}

/// GET /api/v1/standards-of-fill — Whether a container size is authorized.
pub async fn check_standard_of_fill(
    Query(query): Query<FillQuery>,
) -> Result<Json<FillResponse>, ApiError> {
    let beverage_type = parse_beverage_type(&query.beverage_type)?;
    Ok(Json(FillResponse {
        beverage_type: beverage_type.to_string(),
        size_ml: query.size_ml,
        valid: beverage_config::is_valid_size(beverage_type, query.size_ml),
    }))
}
