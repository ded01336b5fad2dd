//! PARLAY DESK: parlay recommendations and bankroll history for a
//! betting dashboard.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod data;
pub mod strategy;
pub mod history;
pub mod dashboard;
