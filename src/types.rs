//! Shared types for PARLAY DESK.
//!
//! These types form the data model handed to the presentation layer.
//! All of them are built fresh per request and never mutated afterwards.
//! They serialize with camelCase field names, which is the shape the
//! dashboard front-end reads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Match
// ---------------------------------------------------------------------------

/// A single wagered outcome (here: "Over 2.5 goals") on one fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    /// RFC 3339 kickoff time as delivered by the provider.
    pub kickoff_time: String,
    /// Bookmaker price, always > 1.0.
    pub decimal_odds: f64,
    /// Our own estimate that the outcome happens, in (0, 0.95].
    pub model_probability: f64,
}

impl Match {
    /// The bookmaker's break-even probability.
    pub fn implied_probability(&self) -> f64 {
        1.0 / self.decimal_odds
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {} @ {:.2} (model {:.1}%)",
            self.home_team,
            self.away_team,
            self.decimal_odds,
            self.model_probability * 100.0,
        )
    }
}

// ---------------------------------------------------------------------------
// Parlay
// ---------------------------------------------------------------------------

/// A combined bet: every leg must win, payout odds multiply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parlay {
    pub id: String,
    pub title: String,
    pub matches: Vec<Match>,
    pub total_odds: f64,
    pub model_probability: f64,
    /// Suggested stake as a percentage of bankroll.
    pub recommended_stake_percent: f64,
}

impl Parlay {
    /// Expected return per unit staked under the model probability.
    pub fn expected_value(&self) -> f64 {
        self.model_probability * self.total_odds - 1.0
    }
}

impl fmt::Display for Parlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({} legs | odds {:.2} | model {:.1}% | EV {:+.3} | stake {:.2}%)",
            self.id,
            self.title,
            self.matches.len(),
            self.total_odds,
            self.model_probability * 100.0,
            self.expected_value(),
            self.recommended_stake_percent,
        )
    }
}

/// Result of a parlay build: the deck plus an optional advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetsResponse {
    pub parlays: Vec<Parlay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl BetsResponse {
    pub fn is_fallback(&self) -> bool {
        self.warning.is_some()
    }
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankrollPoint {
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub value: f64,
}

/// Aggregate performance numbers shown on the history page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryMetrics {
    /// Return on investment, in %.
    pub roi: f64,
    /// Yield, in %.
    pub yield_percent: f64,
    pub profit_units: f64,
    pub total_bets: u32,
    pub winning_bets: u32,
}

impl HistoryMetrics {
    pub fn win_rate(&self) -> f64 {
        if self.total_bets == 0 {
            0.0
        } else {
            self.winning_bets as f64 / self.total_bets as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryData {
    pub metrics: HistoryMetrics,
    pub bankroll_history: Vec<BankrollPoint>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
