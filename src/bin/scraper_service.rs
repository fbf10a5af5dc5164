use std::sync::Arc;
use tokio::net::TcpListener;
use fechas_bot::{
    config::ScraperConfig,
    api::routes::create_scraper_router,
    telemetry::init_tracing,
    ScraperState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ScraperConfig::load()?;
    init_tracing();

    let server_addr = config.server_addr;
    tracing::info!(source_url = %config.source_url, timeout = ?config.fetch_timeout, "starting scraper service");

    let app = create_scraper_router(ScraperState {
        config: Arc::new(config),
    });

    let listener = TcpListener::bind(server_addr).await?;
    tracing::info!(%server_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
