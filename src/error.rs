use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors surfaced at the HTTP boundary. The engine itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request validation failed: {0}")]
    Validation(#[from] garde::Report),

    #[error("Unknown beverage type '{0}'")]
    UnknownBeverageType(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UnknownBeverageType(_) => StatusCode::BAD_REQUEST,
        };
        tracing::warn!(error = %self, "Rejecting request");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
