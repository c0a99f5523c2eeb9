pub mod health;
pub mod metrics;
pub mod review;
pub mod settings;
pub mod validate;

use std::str::FromStr;

use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::models::beverage::BeverageType;

/// API routes. `/metrics` is mounted separately by the binary because it
/// needs the installed Prometheus recorder.
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/validate", post(validate::validate_submission))
        .route("/api/v1/review/reevaluate", post(review::reevaluate_status))
        .route("/api/v1/settings/strictness", get(settings::strictness_settings))
        .route("/api/v1/standards-of-fill", get(settings::check_standard_of_fill))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
}

pub(crate) fn parse_beverage_type(raw: &str) -> Result<BeverageType, ApiError> {
    BeverageType::from_str(raw.trim()).map_err(|_| ApiError::UnknownBeverageType(raw.to_string()))
}
