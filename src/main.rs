use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

use beverage_lens::app_state::AppState;
use beverage_lens::config::AppConfig;
use beverage_lens::routes::build_router;
use beverage_lens::services::openai::OpenAiClient;

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

    tracing::info!(mode = %config.app_env, model = %config.openai_model, "Initializing beverage-lens server");

    // Prometheus exporter runs on its own listener, only when configured
    if let Some(metrics_addr) = &config.metrics_addr {
        let addr: SocketAddr = metrics_addr.parse().expect("Invalid METRICS_ADDR");
        PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()
            .expect("Failed to install Prometheus metrics exporter");
        tracing::info!("Serving metrics on {}", addr);
    }

    metrics::describe_counter!(
        "image_analysis_requests_total",
        "Total image analysis requests received"
    );
    metrics::describe_counter!(
        "image_analysis_failures_total",
        "Total image analysis requests that ended in an error response"
    );
    metrics::describe_histogram!(
        "image_analysis_upstream_seconds",
        "Time spent waiting for the vision model"
    );

    let bind_addr = config.bind_addr();
    let vision = OpenAiClient::new(
        &config.openai_base_url,
        config.open_ai_api_key,
        &config.openai_model,
    );
    let state = AppState::new(vision, config.app_env);
    let app = build_router(state, config.body_limit_bytes);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running on {}", bind_addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
