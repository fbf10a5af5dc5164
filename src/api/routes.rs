use axum::{
    body::Bytes,
    routing::{get, post},
    Router,
    extract::{Json, State},
    response::IntoResponse,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use chrono::Utc;

use crate::api::models::{HealthStatus, ScrapeResult, WebhookRequest, WebhookResponse};
use crate::error::Result;
use crate::relay::fetch_scraper_message;
use crate::scraper::fetch_dates;
use crate::{RelayState, ScraperState};

pub const DATES_INTENT: &str = "Fechas importantes";
pub const NO_INFORMATION_MESSAGE: &str =
    "No encontré información sobre esa intención (intent no reconocido).";
pub const APOLOGY_MESSAGE: &str =
    "Lo siento, no pude acceder a las fechas académicas en este momento.";

pub const RELAY_BANNER: &str = "Webhook del chatbot de fechas académicas activo.";

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn create_scraper_router(state: ScraperState) -> Router {
    Router::new()
        .route("/fechas", get(dates_handler))
        .route("/health", get(|| health("scraper")))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn create_relay_router(state: RelayState) -> Router {
    Router::new()
        .route("/", get(|| async { RELAY_BANNER }))
        .route("/webhook", post(webhook_handler))
        .route("/health", get(|| health("relay")))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(service: &'static str) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        service,
        timestamp: Utc::now(),
    })
}

async fn dates_handler(State(state): State<ScraperState>) -> Result<Json<ScrapeResult>> {
    let url = &state.config.source_url;
    let start_time = std::time::Instant::now();

    match fetch_dates(url, state.config.fetch_timeout).await {
        Ok(message) => {
            tracing::info!(url = %url, elapsed = ?start_time.elapsed(), "served academic dates");
            Ok(Json(ScrapeResult { message }))
        }
        Err(err) => {
            tracing::error!(url = %url, error = %err, "failed to fetch academic dates");
            Err(err)
        }
    }
}

async fn webhook_handler(State(state): State<RelayState>, body: Bytes) -> impl IntoResponse {
    let request = match serde_json::from_slice::<WebhookRequest>(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(error = %err, "unreadable webhook payload, treating intent as unknown");
            WebhookRequest::default()
        }
    };

    let intent = request.intent_name();
    tracing::info!(intent, "received webhook");

    if intent != DATES_INTENT {
        tracing::info!(intent, "intent not recognised");
        return Json(WebhookResponse::reply(NO_INFORMATION_MESSAGE));
    }

    match fetch_scraper_message(&state.config.scraper_url, state.config.scraper_timeout).await {
        Ok(message) => Json(WebhookResponse::reply(message)),
        Err(err) => {
            tracing::error!(error = %err, scraper_url = %state.config.scraper_url, "scraper call failed");
            Json(WebhookResponse::reply(APOLOGY_MESSAGE))
        }
    }
}
