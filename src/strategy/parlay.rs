//! Parlay assembly: partitioning matches and computing parlay aggregates.

use crate::types::{round2, Match, Parlay};

/// Legs per parlay.
pub const LEGS_PER_PARLAY: usize = 2;

/// Floor on the stake heuristic, in % of bankroll.
pub const MIN_STAKE_PERCENT: f64 = 0.5;

/// Stake heuristic pivot: shorter combined odds earn a larger stake.
const STAKE_PIVOT: f64 = 2.5;

/// Naive stake heuristic: `max(0.5, 2.5 - total_odds)`, rounded to 2 dp.
pub fn recommended_stake_percent(total_odds: f64) -> f64 {
    round2(MIN_STAKE_PERCENT.max(STAKE_PIVOT - total_odds))
}

/// Build a parlay from its legs. Returns `None` for an empty leg list.
///
/// Legs are treated as independent: odds and probabilities multiply.
pub fn assemble(id: &str, title: &str, matches: &[Match]) -> Option<Parlay> {
    if matches.is_empty() {
        return None;
    }
    let total_odds: f64 = matches.iter().map(|m| m.decimal_odds).product();
    let model_probability: f64 = matches.iter().map(|m| m.model_probability).product();

    Some(Parlay {
        id: id.to_string(),
        title: title.to_string(),
        matches: matches.to_vec(),
        total_odds,
        model_probability,
        recommended_stake_percent: recommended_stake_percent(total_odds),
    })
}

/// Split matches into the cautious slice `[0..2]` and, when at least four
/// matches exist, the adventurous slice `[2..4]`. Anything past the fourth
/// match is unused.
pub fn partition(matches: &[Match]) -> (&[Match], &[Match]) {
    let cautious = &matches[..matches.len().min(LEGS_PER_PARLAY)];
    let adventurous = if matches.len() >= 2 * LEGS_PER_PARLAY {
        &matches[LEGS_PER_PARLAY..2 * LEGS_PER_PARLAY]
    } else {
        &[]
    };
    (cautious, adventurous)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
