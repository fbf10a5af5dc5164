pub mod api;
pub mod config;
pub mod error;
pub mod relay;
pub mod scraper;
pub mod telemetry;

use std::sync::Arc;
use config::{RelayConfig, ScraperConfig};

/// State shared across the scraper service handlers
#[derive(Clone)]
pub struct ScraperState {
    pub config: Arc<ScraperConfig>,
}

/// State shared across the webhook relay handlers
#[derive(Clone)]
pub struct RelayState {
    pub config: Arc<RelayConfig>,
}
