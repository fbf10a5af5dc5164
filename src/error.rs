use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};

use crate::api::models::ScrapeResult;

/// Prefix of the message returned by `GET /fechas` when the source page cannot be fetched.
pub const FETCH_ERROR_PREFIX: &str = "Error al obtener las fechas: ";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to fetch data: {0}")]
    FetchError(String),

    #[error("Scraper service call failed: {0}")]
    UpstreamError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::FetchError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{}{}", FETCH_ERROR_PREFIX, msg),
            ),
            err @ AppError::UpstreamError(_) => (StatusCode::BAD_GATEWAY, err.to_string()),
            err @ AppError::ConfigError(_) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        (status, Json(ScrapeResult { message })).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchError(err.to_string())
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
