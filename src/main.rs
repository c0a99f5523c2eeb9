use std::sync::Arc;

use cola_verify::app_state::AppState;
use cola_verify::config::AppConfig;
use cola_verify::routes::{self, metrics::describe_metrics, metrics::metrics_router};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing cola-verify server");

    let strictness = config
        .strictness_policy()
        .expect("Invalid STRICTNESS_OVERRIDES");
    tracing::info!(
        overrides = config.strictness_overrides.as_deref().unwrap_or(""),
        "Loaded field strictness policy"
    );

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    describe_metrics();

    let state = AppState::new(strictness);
    let app = routes::router(state, config.max_body_bytes)
        .merge(metrics_router(Arc::new(prometheus_handle)));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
