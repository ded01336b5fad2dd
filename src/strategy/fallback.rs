//! Sample deck served whenever live odds are unusable.
//!
//! Every value here is a literal. The aggregate fields are the rounded
//! display numbers, not recomputed products.

use crate::types::{Match, Parlay};

fn sample_match(
    id: &str,
    home_team: &str,
    away_team: &str,
    kickoff_time: &str,
    decimal_odds: f64,
    model_probability: f64,
) -> Match {
    Match {
        id: id.to_string(),
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        kickoff_time: kickoff_time.to_string(),
        decimal_odds,
        model_probability,
    }
}

/// The fixed two-parlay sample deck.
pub fn sample_deck() -> Vec<Parlay> {
    vec![
        Parlay {
            id: "parlay-01".to_string(),
            title: "Cautious Parlay (Sample Data)".to_string(),
            matches: vec![
                sample_match("match-101", "PSG", "Lille", "2024-10-26T19:00:00Z", 1.45, 0.72),
                sample_match("match-102", "Real Madrid", "Girona", "2024-10-26T21:00:00Z", 1.30, 0.81),
            ],
            total_odds: 1.89,
            model_probability: 0.58,
            recommended_stake_percent: 1.5,
        },
        Parlay {
            id: "parlay-02".to_string(),
            title: "Adventurous Parlay (Sample Data)".to_string(),
            matches: vec![
                sample_match("match-201", "Arsenal", "Man City", "2024-10-27T15:30:00Z", 1.60, 0.65),
                sample_match("match-202", "Inter Milan", "Juventus", "2024-10-27T18:45:00Z", 1.55, 0.68),
            ],
            total_odds: 2.48,
            model_probability: 0.44,
            recommended_stake_percent: 0.75,
        },
    ]
}
