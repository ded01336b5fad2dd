//! Model probability estimation.
//!
//! Starts from the bookmaker's implied probability and adds a bounded
//! random "edge" in `[0, max_noise)`, capped just below certainty. The
//! random source is a seedable `StdRng` so runs can be reproduced.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::config::ModelConfig;
use crate::types::Match;

/// Hard cap on any model probability.
pub const MAX_MODEL_PROBABILITY: f64 = 0.95;

pub struct EdgeModel {
    max_noise: f64,
    rng: Mutex<StdRng>,
}

impl EdgeModel {
    pub fn new(config: &ModelConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            max_noise: config.max_noise,
            rng: Mutex::new(rng),
        }
    }

    /// Draw one noise sample in `[0, max_noise)`. A non-positive bound
    /// disables the edge.
    fn noise(&self) -> f64 {
        if self.max_noise.is_nan() || self.max_noise <= 0.0 {
            return 0.0;
        }
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(0.0..self.max_noise)
    }

    /// Model probability for a leg: its implied probability plus the edge.
    pub fn estimate(&self, leg: &Match) -> f64 {
        (leg.implied_probability() + self.noise()).min(MAX_MODEL_PROBABILITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(decimal_odds: f64) -> Match {
        Match {
            id: "leg".into(),
            home_team: "Home".into(),
            away_team: "Away".into(),
            kickoff_time: "2026-10-18T15:00:00Z".into(),
            decimal_odds,
            model_probability: 0.0,
        }
    }

    fn model(seed: u64, max_noise: f64) -> EdgeModel {
        EdgeModel::new(&ModelConfig { max_noise, seed: Some(seed) })
    }

    #[test]
    fn test_noise_is_bounded() {
        let m = model(7, 0.1);
        for _ in 0..1000 {
            let n = m.noise();
            assert!((0.0..0.1).contains(&n), "noise out of range: {n}");
        }
    }

    #[test]
    fn test_probability_above_implied() {
        let m = model(1, 0.1);
        for odds in [1.2, 1.5, 2.0, 3.4, 8.0] {
            let p = m.estimate(&leg(odds));
            let implied = 1.0 / odds;
            assert!(p >= implied - 1e-12 || (p - MAX_MODEL_PROBABILITY).abs() < 1e-12);
            assert!(p < implied + 0.1);
        }
    }

    #[test]
    fn test_probability_capped() {
        let m = model(3, 0.1);
        for _ in 0..200 {
            let p = m.estimate(&leg(1.01));
            assert!(p > 0.0 && p <= MAX_MODEL_PROBABILITY);
        }
        assert_eq!(m.estimate(&leg(1.01)), MAX_MODEL_PROBABILITY);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = model(42, 0.1);
        let b = model(42, 0.1);
        for odds in [1.8, 2.1, 1.6] {
            assert_eq!(a.estimate(&leg(odds)), b.estimate(&leg(odds)));
        }
    }

    #[test]
    fn test_zero_noise_is_implied() {
        let m = model(9, 0.0);
        assert!((m.estimate(&leg(2.0)) - 0.5).abs() < 1e-12);
        assert!((m.estimate(&leg(4.0)) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_seed_still_bounded() {
        let m = EdgeModel::new(&ModelConfig::default());
        let p = m.estimate(&leg(2.5));
        assert!(p >= 0.4 && p < 0.5);
    }
}
