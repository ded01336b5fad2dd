//! Parlay strategy: probability modelling and deck building.
//!
//! `ParlayBuilder::build_todays_parlays` is the only entry point the
//! dashboard needs. It never fails: every failure path resolves to the
//! sample deck plus a human-readable warning.

pub mod edge;
pub mod fallback;
pub mod parlay;

use std::fmt;
use tracing::{debug, info, warn};

use crate::data::{OddsEvent, OddsSource};
use crate::types::{BetsResponse, Match, Parlay};
use edge::EdgeModel;

const CAUTIOUS_ID: &str = "parlay-live-01";
const CAUTIOUS_TITLE: &str = "Cautious Parlay (Live Data)";
const ADVENTUROUS_ID: &str = "parlay-live-02";
const ADVENTUROUS_TITLE: &str = "Adventurous Parlay (Live Data)";

/// Minimum usable matches before we try to form parlays.
const MIN_USABLE_MATCHES: usize = 2;

// ---------------------------------------------------------------------------
// Fallback reasons
// ---------------------------------------------------------------------------

/// Why live data could not be used. Each variant renders as the warning
/// shown to the user next to the sample deck.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    NotConfigured,
    /// Transport, HTTP or decoding failure, with the provider's message.
    Provider(String),
    NoUpcomingMatches,
    InsufficientMatches,
    NoParlaysFormed,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::NotConfigured => write!(
                f,
                "Odds provider not configured. Showing sample data; get a free key at the-odds-api.com."
            ),
            FallbackReason::Provider(message) => write!(
                f,
                "Live odds could not be loaded ({message}). Showing sample data."
            ),
            FallbackReason::NoUpcomingMatches => {
                write!(f, "The provider listed no upcoming matches. Showing sample data.")
            }
            FallbackReason::InsufficientMatches => write!(
                f,
                "Live odds had insufficient matches with an Over/Under 2.5 line. Showing sample data."
            ),
            FallbackReason::NoParlaysFormed => {
                write!(f, "Live matches could not form parlays. Showing sample data.")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

pub struct ParlayBuilder {
    model: EdgeModel,
}

impl ParlayBuilder {
    pub fn new(model: EdgeModel) -> Self {
        Self { model }
    }

    /// Fetch live odds once and turn them into today's parlays, or fall
    /// back to the sample deck with a warning.
    pub async fn build_todays_parlays(&self, source: &dyn OddsSource) -> BetsResponse {
        if !source.is_configured() {
            return Self::fallback(FallbackReason::NotConfigured);
        }

        let events = match source.fetch_upcoming().await {
            Ok(events) => events,
            Err(e) => {
                warn!(error = %e, "Odds fetch failed");
                return Self::fallback(FallbackReason::Provider(e.to_string()));
            }
        };

        match self.build_from_events(&events) {
            Ok(parlays) => {
                for parlay in &parlays {
                    info!(parlay = %parlay, "Built live parlay");
                }
                info!(
                    events = events.len(),
                    parlays = parlays.len(),
                    "Built live parlays"
                );
                BetsResponse { parlays, warning: None }
            }
            Err(reason) => Self::fallback(reason),
        }
    }

    /// Pure part of the pipeline: raw events → parlays.
    pub fn build_from_events(&self, events: &[OddsEvent]) -> Result<Vec<Parlay>, FallbackReason> {
        if events.is_empty() {
            return Err(FallbackReason::NoUpcomingMatches);
        }

        let matches: Vec<Match> = events.iter().filter_map(|e| self.to_match(e)).collect();
        debug!(
            events = events.len(),
            usable = matches.len(),
            "Filtered events with an Over 2.5 quote"
        );

        if matches.len() < MIN_USABLE_MATCHES {
            return Err(FallbackReason::InsufficientMatches);
        }

        let (cautious, adventurous) = parlay::partition(&matches);
        let parlays: Vec<Parlay> = [
            parlay::assemble(CAUTIOUS_ID, CAUTIOUS_TITLE, cautious),
            parlay::assemble(ADVENTUROUS_ID, ADVENTUROUS_TITLE, adventurous),
        ]
        .into_iter()
        .flatten()
        .collect();

        // Only reachable if MIN_USABLE_MATCHES drops below LEGS_PER_PARLAY.
        if parlays.is_empty() {
            return Err(FallbackReason::NoParlaysFormed);
        }
        Ok(parlays)
    }

    /// Model one event. `None` when it has no usable Over 2.5 price.
    fn to_match(&self, event: &OddsEvent) -> Option<Match> {
        let mut leg = Match {
            id: event.id.clone(),
            home_team: event.home_team.clone(),
            away_team: event.away_team.clone(),
            kickoff_time: event.commence_time.clone(),
            decimal_odds: event.over_2_5_price()?,
            model_probability: 0.0,
        };
        leg.model_probability = self.model.estimate(&leg);
        debug!(leg = %leg, "Modelled match");
        Some(leg)
    }

    fn fallback(reason: FallbackReason) -> BetsResponse {
        warn!(reason = ?reason, "Serving sample parlays");
        BetsResponse {
            parlays: fallback::sample_deck(),
            warning: Some(reason.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
