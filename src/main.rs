use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use wonder::api::{self, app_state::AppState};
use wonder::config::ConfigLoader;
use wonder::observability::{
    AppMetrics, HealthCheckResult, ObservabilityState, create_observability_router, init_tracing,
};
use wonder::services::seed::seed_demo_data;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("failed to load configuration")?;
    ConfigLoader::validate(&config).context("invalid configuration")?;

    let _log_guard = init_tracing(&config.logging);
    info!("Starting {} ({})...", config.app_name, config.environment);
    info!("Configuration loaded successfully");

    let metrics = Arc::new(AppMetrics::default());
    let app_state = AppState::new(&config, metrics.clone());
    info!("Application state created");

    if config.graph.seed_demo_data {
        seed_demo_data(&app_state);
    }

    let concept_count = app_state.concepts.read().len();

    // 创建可观测性状态并集成路由
    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        metrics,
    ));
    observability_state
        .add_health_check(HealthCheckResult::healthy(
            "knowledge_graph",
            format!("{} concepts loaded", concept_count),
        ))
        .await;

    let api_router = api::create_router(app_state, &config.server);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
