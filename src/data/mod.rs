//! Odds data providers.
//!
//! Defines the `OddsSource` trait, the raw provider record shapes
//! (The Odds API v4 `/odds` payload), and the provider error type.

pub mod odds_api;

use async_trait::async_trait;
use serde::Deserialize;

/// Market key for over/under goal lines.
pub const TOTALS_MARKET: &str = "totals";
/// Outcome name for the "over" side of a totals line.
pub const OVER_OUTCOME: &str = "Over";
/// The goal line we model.
pub const TOTALS_POINT: f64 = 2.5;

// ---------------------------------------------------------------------------
// Raw provider records
// ---------------------------------------------------------------------------

/// One upcoming fixture with the bookmaker quotes attached to it.
#[derive(Debug, Clone, Deserialize)]
pub struct OddsEvent {
    pub id: String,
    pub commence_time: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Bookmaker {
    pub key: String,
    #[serde(default)]
    pub markets: Vec<BookmakerMarket>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookmakerMarket {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Outcome {
    pub name: String,
    pub price: f64,
    /// Line for totals/spreads markets. Absent on head-to-head markets.
    #[serde(default)]
    pub point: Option<f64>,
}

impl OddsEvent {
    /// First "Over 2.5" totals price across bookmakers, in provider order.
    ///
    /// Only the first totals market of each bookmaker is inspected. Prices
    /// that are not finite or not above 1.0 cannot be modelled and count
    /// as absent.
    pub fn over_2_5_price(&self) -> Option<f64> {
        self.bookmakers.iter().find_map(|bookmaker| {
            let totals = bookmaker.markets.iter().find(|m| m.key == TOTALS_MARKET)?;
            totals
                .outcomes
                .iter()
                .find(|o| o.name == OVER_OUTCOME && o.point == Some(TOTALS_POINT))
                .map(|o| o.price)
                .filter(|price| price.is_finite() && *price > 1.0)
        })
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum OddsError {
    #[error("odds provider is not configured")]
    NotConfigured,

    #[error("odds provider returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("odds provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("odds provider response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Source trait
// ---------------------------------------------------------------------------

/// Abstraction over a live odds feed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Whether a usable credential is present. When false the builder
    /// never calls `fetch_upcoming`.
    fn is_configured(&self) -> bool;

    /// Fetch upcoming fixtures with their totals quotes. One request, no retry.
    async fn fetch_upcoming(&self) -> Result<Vec<OddsEvent>, OddsError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
