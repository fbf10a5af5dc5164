use std::time::Duration;

use crate::api::models::ScrapeResult;
use crate::error::{AppError, Result};
use crate::scraper::CLIENT;

pub fn dates_endpoint(base_url: &str) -> String {
    format!("{}/fechas", base_url.trim_end_matches('/'))
}

/// Asks the scraper service for the current dates message.
///
/// Connection failures, the timeout elapsing, a non-2xx status and an
/// undecodable body all come back as [`AppError::UpstreamError`].
pub async fn fetch_scraper_message(base_url: &str, timeout: Duration) -> Result<String> {
    let url = dates_endpoint(base_url);

    let response = CLIENT
        .get(&url)
        .timeout(timeout)
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map_err(|e| AppError::UpstreamError(e.to_string()))?;

    let result: ScrapeResult = response
        .json()
        .await
        .map_err(|e| AppError::UpstreamError(format!("Invalid response from scraper: {}", e)))?;

    Ok(result.message)
}
