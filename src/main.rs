use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use facility_advisor::adapters::http::{app_router, AdvisorAppState};
use facility_advisor::adapters::{
    DirectoryCatalog, EmbeddedCatalog, InMemorySharePlatform, NoDelay, TokioDelay,
};
use facility_advisor::config::AppConfig;
use facility_advisor::ports::{CosmeticDelay, ToolCatalog};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let source: Box<dyn ToolCatalog> = match config.catalog.data_dir() {
        Some(dir) => Box::new(DirectoryCatalog::new(dir)),
        None => Box::new(EmbeddedCatalog::new()),
    };
    let catalog = Arc::new(source.load().await?);

    let delay: Arc<dyn CosmeticDelay> = if config.features.simulated_latency_ms > 0 {
        Arc::new(TokioDelay::new(config.features.simulated_latency()))
    } else {
        Arc::new(NoDelay)
    };

    let state = AdvisorAppState::new(catalog, delay).with_share(
        Arc::new(InMemorySharePlatform::new()),
        config.features.share_fallback_enabled,
    );
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Starting facility advisor");
    axum::serve(listener, app).await?;

    Ok(())
}

/// JSON logs in production, human-readable output otherwise.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}
