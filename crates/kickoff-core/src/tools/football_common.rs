//! Shared utilities for the API-Football tools.
//!
//! Provides HTTP client construction, request header names, and endpoint
//! paths.

use std::time::Duration;

use crate::config::FootballConfig;

// ── API Endpoints ──────────────────────────────────────────────────

pub const STANDINGS_PATH: &str = "/standings";

pub const API_KEY_HEADER: &str = "x-rapidapi-key";
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

// ── HTTP Client ────────────────────────────────────────────────────

/// Build a `reqwest` client with the configured request timeout.
pub fn build_http_client(config: &FootballConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(concat!("kickoff/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Join the configured base URL and an endpoint path.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
