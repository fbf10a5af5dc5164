use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

pub const DEFAULT_SOURCE_URL: &str = "https://www.uniquindio.edu.co/portal/fechas-academicas/";
pub const DEFAULT_SCRAPER_URL: &str = "http://127.0.0.1:5000";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_SCRAPER_PORT: u16 = 5000;
const DEFAULT_RELAY_PORT: u16 = 3000;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
const DEFAULT_SCRAPER_TIMEOUT_SECS: u64 = 20;

/// Settings for the service that scrapes the academic calendar.
#[derive(Clone, Debug)]
pub struct ScraperConfig {
    pub server_addr: SocketAddr,
    pub source_url: String,
    pub fetch_timeout: Duration,
}

/// Settings for the chatbot webhook relay.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub server_addr: SocketAddr,
    pub scraper_url: String,
    pub scraper_timeout: Duration,
}

impl ScraperConfig {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the config from `lookup`, falling back to defaults for unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_addr = server_addr(&lookup, DEFAULT_SCRAPER_PORT)?;
        let source_url = lookup("SOURCE_URL").unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string());
        let fetch_timeout = timeout_secs(&lookup, "FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS)?;

        Ok(ScraperConfig {
            server_addr,
            source_url,
            fetch_timeout,
        })
    }
}

impl RelayConfig {
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_addr = server_addr(&lookup, DEFAULT_RELAY_PORT)?;
        let scraper_url = lookup("SCRAPER_URL").unwrap_or_else(|| DEFAULT_SCRAPER_URL.to_string());
        let scraper_timeout = timeout_secs(&lookup, "SCRAPER_TIMEOUT_SECS", DEFAULT_SCRAPER_TIMEOUT_SECS)?;

        Ok(RelayConfig {
            server_addr,
            scraper_url,
            scraper_timeout,
        })
    }
}

fn server_addr(lookup: &impl Fn(&str) -> Option<String>, default_port: u16) -> Result<SocketAddr> {
    let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = match lookup("PORT") {
        Some(port) => parse_port(&port)?,
        None => default_port,
    };
    let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

    Ok(SocketAddr::new(ip, port))
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))
}

fn timeout_secs(lookup: &impl Fn(&str) -> Option<String>, var: &str, default: u64) -> Result<Duration> {
    let secs = match lookup(var) {
        Some(raw) => parse_timeout(var, &raw)?,
        None => default,
    };
    Ok(Duration::from_secs(secs))
}

fn parse_timeout(var: &str, raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(AppError::ConfigError(format!("{} must be greater than zero", var))),
        Ok(secs) => Ok(secs),
        Err(e) => Err(AppError::ConfigError(format!("Invalid {}: {}", var, e))),
    }
}
