use std::sync::Arc;
use tokio::net::TcpListener;
use fechas_bot::{
    config::RelayConfig,
    api::routes::create_relay_router,
    telemetry::init_tracing,
    RelayState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RelayConfig::load()?;
    init_tracing();

    let server_addr = config.server_addr;
    tracing::info!(scraper_url = %config.scraper_url, timeout = ?config.scraper_timeout, "starting webhook relay");

    let app = create_relay_router(RelayState {
        config: Arc::new(config),
    });

    let listener = TcpListener::bind(server_addr).await?;
    tracing::info!(%server_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
