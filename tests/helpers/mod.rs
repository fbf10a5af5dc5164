//! Shared plumbing for the HTTP integration tests.
//!
//! Routers under test are driven with `tower::ServiceExt::oneshot`. Anything they
//! call out to (the calendar page, the scraper service) is a real axum server
//! bound to an ephemeral port on localhost.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use fechas_bot::config::{RelayConfig, ScraperConfig};
use fechas_bot::{RelayState, ScraperState};
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Serves `router` in the background and returns its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind upstream");
    let addr = listener.local_addr().expect("upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("upstream server");
    });
    format!("http://{}", addr)
}

/// A URL on a port nobody is listening on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{}", addr)
}

pub fn scraper_state(source_url: String, fetch_timeout: Duration) -> ScraperState {
    ScraperState {
        config: Arc::new(ScraperConfig {
            server_addr: "127.0.0.1:0".parse().unwrap(),
            source_url,
            fetch_timeout,
        }),
    }
}

pub fn relay_state(scraper_url: String, scraper_timeout: Duration) -> RelayState {
    RelayState {
        config: Arc::new(RelayConfig {
            server_addr: "127.0.0.1:0".parse().unwrap(),
            scraper_url,
            scraper_timeout,
        }),
    }
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

/// Like [`get`], for endpoints that answer with plain text.
pub async fn get_text(router: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn post_json(router: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    post_raw(router, uri, body.to_string()).await
}

pub async fn post_raw(router: Router, uri: &str, body: String) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(router, request).await
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
