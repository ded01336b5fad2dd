//! Bankroll history generator.
//!
//! There is no bet-outcome ledger yet, so the history page is fed a
//! synthetic random walk over the last 31 days plus a fixed metrics block.
//! The metrics are intentionally NOT derived from the walk; they are a
//! placeholder until a real ledger exists.

use chrono::{Days, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::HistoryConfig;
use crate::types::{round2, BankrollPoint, HistoryData, HistoryMetrics};

/// Days in the series, today included.
pub const HISTORY_DAYS: u64 = 31;
pub const STARTING_BANKROLL: f64 = 100.0;
pub const BANKROLL_FLOOR: f64 = 50.0;

/// Daily step is `(u - DRIFT_CENTER) * STEP_SCALE` with `u ~ U(0,1)`,
/// which biases the walk slightly upward.
const DRIFT_CENTER: f64 = 0.45;
const STEP_SCALE: f64 = 5.0;

/// Fixed performance summary shown alongside the walk.
pub fn placeholder_metrics() -> HistoryMetrics {
    HistoryMetrics {
        roi: 12.5,
        yield_percent: 8.2,
        profit_units: 55.7,
        total_bets: 68,
        winning_bets: 41,
    }
}

pub struct HistoryGenerator {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl HistoryGenerator {
    pub fn new(config: &HistoryConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            delay: Duration::from_millis(config.delay_ms),
            rng: Mutex::new(rng),
        }
    }

    /// Generate the history ending today (UTC), after the simulated delay.
    pub async fn generate_history(&self) -> HistoryData {
        if !self.delay.is_zero() {
            debug!(delay_ms = self.delay.as_millis() as u64, "Simulating ledger latency");
            tokio::time::sleep(self.delay).await;
        }
        let data = self.generate_for(Utc::now().date_naive());
        info!(
            points = data.bankroll_history.len(),
            last = data.bankroll_history.last().map(|p| p.value),
            win_rate = data.metrics.win_rate(),
            "History generated"
        );
        data
    }

    /// Generate the history ending on `today`, oldest day first.
    pub fn generate_for(&self, today: NaiveDate) -> HistoryData {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let mut bankroll = STARTING_BANKROLL;
        let bankroll_history = (0..HISTORY_DAYS)
            .rev()
            .filter_map(|days_back| today.checked_sub_days(Days::new(days_back)))
            .map(|date| {
                let u: f64 = rng.gen();
                bankroll += (u - DRIFT_CENTER) * STEP_SCALE;
                bankroll = bankroll.max(BANKROLL_FLOOR);
                BankrollPoint { date, value: round2(bankroll) }
            })
            .collect();

        HistoryData {
            metrics: placeholder_metrics(),
            bankroll_history,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
