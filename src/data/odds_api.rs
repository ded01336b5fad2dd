//! The Odds API v4 client.
//!
//! API: `https://api.the-odds-api.com/v4/sports/{sport}/odds/`
//! Auth: `apiKey` query parameter. Free tier: 500 credits/month; each
//! `/odds` call costs one credit per region per market.
//!
//! We only request the `totals` market in decimal format.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{OddsError, OddsEvent, OddsSource, TOTALS_MARKET};
use crate::config::OddsConfig;

/// Error body returned by the provider on 4xx/5xx, e.g. a bad key or
/// an exhausted quota.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

pub struct OddsApiClient {
    http: Client,
    base_url: String,
    sport_key: String,
    regions: String,
    api_key: Option<SecretString>,
}

impl OddsApiClient {
    /// Create a client. `api_key` of `None` leaves the client unconfigured;
    /// it will then refuse to make requests.
    pub fn new(config: &OddsConfig, api_key: Option<SecretString>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("PARLAY-DESK/0.1.0")
            .build()
            .context("Failed to build HTTP client for The Odds API")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            sport_key: config.sport_key.clone(),
            regions: config.regions.clone(),
            api_key,
        })
    }

    /// Request URL for the configured sport. The key is inserted verbatim
    /// (URL-encoded) so callers must never log the result.
    fn odds_url(&self, api_key: &str) -> String {
        format!(
            "{}/sports/{}/odds/?regions={}&markets={TOTALS_MARKET}&oddsFormat=decimal&apiKey={}",
            self.base_url,
            urlencoding::encode(&self.sport_key),
            urlencoding::encode(&self.regions),
            urlencoding::encode(api_key),
        )
    }

    /// Pull the provider's `message` out of an error body, or fall back
    /// to the status's reason phrase. The status code itself is already
    /// part of `OddsError::Http`'s display.
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("no error message")
                    .to_string()
            })
    }
}

#[async_trait]
impl OddsSource for OddsApiClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch_upcoming(&self) -> Result<Vec<OddsEvent>, OddsError> {
        let api_key = self.api_key.as_ref().ok_or(OddsError::NotConfigured)?;
        let url = self.odds_url(api_key.expose_secret());

        debug!(
            sport = %self.sport_key,
            regions = %self.regions,
            url = %self.odds_url("<redacted>"),
            "Fetching odds"
        );

        let resp = self.http.get(&url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(OddsError::Http {
                status: status.as_u16(),
                message: Self::error_message(status, &body),
            });
        }

        let body = resp.text().await?;
        let events: Vec<OddsEvent> = serde_json::from_str(&body)?;

        debug!(count = events.len(), "Odds events received");
        Ok(events)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
