//! Dashboard API route handlers.
//!
//! All endpoints return JSON. State is shared via `Arc<DashboardState>`.
//! Handlers never return an error status: the builder and the history
//! generator always produce a displayable result.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::debug;

use crate::data::OddsSource;
use crate::history::HistoryGenerator;
use crate::strategy::ParlayBuilder;
use crate::types::{BetsResponse, HistoryData};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Shared state accessible by all route handlers.
pub struct DashboardState {
    pub odds: Arc<dyn OddsSource>,
    pub builder: ParlayBuilder,
    pub history: HistoryGenerator,
}

impl DashboardState {
    pub fn new(odds: Arc<dyn OddsSource>, builder: ParlayBuilder, history: HistoryGenerator) -> Self {
        Self { odds, builder, history }
    }
}

pub type AppState = Arc<DashboardState>;

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// GET /api/parlays
pub async fn get_parlays(State(state): State<AppState>) -> Json<BetsResponse> {
    let resp = state.builder.build_todays_parlays(state.odds.as_ref()).await;
    debug!(
        parlays = resp.parlays.len(),
        fallback = resp.is_fallback(),
        "Serving parlays"
    );
    Json(resp)
}

/// GET /api/history
pub async fn get_history(State(state): State<AppState>) -> Json<HistoryData> {
    Json(state.history.generate_history().await)
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HistoryConfig, ModelConfig};
    use crate::data::MockOddsSource;
    use crate::strategy::edge::EdgeModel;

    fn state(source: MockOddsSource) -> AppState {
        Arc::new(DashboardState::new(
            Arc::new(source),
            ParlayBuilder::new(EdgeModel::new(&ModelConfig { max_noise: 0.1, seed: Some(1) })),
            HistoryGenerator::new(&HistoryConfig { delay_ms: 0, seed: Some(1) }),
        ))
    }

    fn unconfigured() -> MockOddsSource {
        let mut source = MockOddsSource::new();
        source.expect_is_configured().return_const(false);
        source
    }

    #[tokio::test]
    async fn test_get_parlays_unconfigured() {
        let Json(resp) = get_parlays(State(state(unconfigured()))).await;
        assert_eq!(resp.parlays.len(), 2);
        assert!(resp.warning.is_some());
    }

    #[tokio::test]
    async fn test_get_history_handler() {
        let Json(data) = get_history(State(state(unconfigured()))).await;
        assert_eq!(data.bankroll_history.len(), 31);
        assert_eq!(data.metrics.total_bets, 68);
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(health().await, StatusCode::OK);
    }
}
