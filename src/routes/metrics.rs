use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;

/// Register descriptions for the engine's metrics.
pub fn describe_metrics() {
    metrics::describe_counter!(
        "label_validations_total",
        "Label validation runs by resulting overall status"
    );
    metrics::describe_counter!(
        "label_reevaluations_total",
        "Post-review status re-evaluations by resulting overall status"
    );
    metrics::describe_counter!(
        "field_verdicts_total",
        "Per-field comparison verdicts by field and status"
    );
    metrics::describe_histogram!(
        "label_validation_seconds",
        "Time to validate one label submission"
    );
}

/// `/metrics` route bound to the installed recorder.
pub fn metrics_router(handle: Arc<PrometheusHandle>) -> Router {
    Router::new()
        .route("/metrics", get(prometheus_metrics))
        .with_state(handle)
}

/// Prometheus metrics scrape endpoint.
/// Returns metrics in Prometheus text exposition format.
pub async fn prometheus_metrics(State(handle): State<Arc<PrometheusHandle>>) -> impl IntoResponse {
    handle.render()
}
