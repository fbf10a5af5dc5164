use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Body of `GET /fechas`, on success and on failure alike.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScrapeResult {
    #[serde(alias = "mensaje")]
    pub message: String,
}

/// The slice of a Dialogflow callback the relay cares about.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(default)]
    pub query_result: Option<QueryResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub intent: Option<Intent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    #[serde(default)]
    pub display_name: Option<String>,
}

impl WebhookRequest {
    pub const UNKNOWN_INTENT: &'static str = "Unknown";

    pub fn intent_name(&self) -> &str {
        self.query_result
            .as_ref()
            .and_then(|q| q.intent.as_ref())
            .and_then(|i| i.display_name.as_deref())
            .unwrap_or(Self::UNKNOWN_INTENT)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub fulfillment_text: String,
    pub fulfillment_messages: Vec<FulfillmentMessage>,
}

#[derive(Debug, Serialize)]
pub struct FulfillmentMessage {
    pub text: FulfillmentText,
}

#[derive(Debug, Serialize)]
pub struct FulfillmentText {
    pub text: Vec<String>,
}

impl WebhookResponse {
    pub fn reply(text: impl Into<String>) -> Self {
        let text = text.into();
        WebhookResponse {
            fulfillment_messages: vec![FulfillmentMessage {
                text: FulfillmentText { text: vec![text.clone()] },
            }],
            fulfillment_text: text,
        }
    }
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: DateTime<Utc>,
}
