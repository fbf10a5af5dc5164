use reqwest::{Client, ClientBuilder};
use scraper::{Html, Selector};
use std::time::Duration;
use once_cell::sync::Lazy;
use crate::error::Result;

/// At most this many list items make it into the reply.
pub const MAX_ENTRIES: usize = 10;

pub const NOT_FOUND_MESSAGE: &str = "No se encontraron fechas académicas.";

// Shared by the page fetch and the relay's scraper calls; timeouts are set per request
pub(crate) static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

static LI_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("li").expect("Failed to parse li selector")
});

/// Fetches `url`, treating any non-2xx status as a failure.
pub async fn fetch_html(url: &str, timeout: Duration) -> Result<String> {
    let response = CLIENT
        .get(url)
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?;
    let html = response.text().await?;
    Ok(html)
}

/// Trimmed text of every `<li>` in document order, empty ones dropped.
pub fn extract_list_items(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document.select(&LI_SELECTOR)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

pub fn build_message(items: &[String]) -> String {
    if items.is_empty() {
        return NOT_FOUND_MESSAGE.to_string();
    }

    items.iter()
        .take(MAX_ENTRIES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn fetch_dates(url: &str, timeout: Duration) -> Result<String> {
    let html = fetch_html(url, timeout).await?;
    let items = extract_list_items(&html);
    tracing::debug!(url, found = items.len(), "extracted list items");
    Ok(build_message(&items))
}
