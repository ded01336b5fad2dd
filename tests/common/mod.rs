//! Shared helpers for integration tests.
//!
//! `FakeOddsProvider` is a throwaway axum server bound to an ephemeral
//! local port that answers `/v4/sports/{sport}/odds/` with a canned status
//! and body, and records every query string it receives.
//! `StubOddsSource` is an in-memory `OddsSource` with no network at all.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use parlay_desk::config::OddsConfig;
use parlay_desk::data::{OddsError, OddsEvent, OddsSource};

// ---------------------------------------------------------------------------
// Fake HTTP provider
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub sport: String,
    pub query: HashMap<String, String>,
}

struct FakeState {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct FakeOddsProvider {
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeOddsProvider {
    /// Start a provider that always answers with `status` and `body`.
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let state = Arc::new(FakeState {
            status,
            body: body.into(),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v4/sports/:sport/odds/", get(odds_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/v4"),
            state,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn odds_config(&self) -> OddsConfig {
        OddsConfig {
            base_url: self.base_url.clone(),
            timeout_secs: 5,
            ..OddsConfig::default()
        }
    }
}

async fn odds_handler(
    State(state): State<Arc<FakeState>>,
    Path(sport): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    state.requests.lock().unwrap().push(RecordedRequest { sport, query });
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// An address nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v4")
}

// ---------------------------------------------------------------------------
// Provider payloads
// ---------------------------------------------------------------------------

/// One provider record. `over` is the Over 2.5 price; `None` leaves only
/// an Under 2.5 quote and an Over 3.5 quote, which must be ignored.
pub fn event_json(id: &str, over: Option<f64>) -> serde_json::Value {
    let mut outcomes = vec![
        json!({"name": "Under", "price": 1.95, "point": 2.5}),
        json!({"name": "Over", "price": 3.4, "point": 3.5}),
    ];
    if let Some(price) = over {
        outcomes.push(json!({"name": "Over", "price": price, "point": 2.5}));
    }
    json!({
        "id": id,
        "sport_key": "soccer_epl",
        "commence_time": "2026-10-18T14:00:00Z",
        "home_team": format!("{id} Home"),
        "away_team": format!("{id} Away"),
        "bookmakers": [
            {"key": "unibet_eu", "title": "Unibet", "markets": [
                {"key": "h2h", "outcomes": [
                    {"name": format!("{id} Home"), "price": 2.1}
                ]},
                {"key": "totals", "outcomes": outcomes}
            ]}
        ]
    })
}

pub fn events_body(events: &[serde_json::Value]) -> String {
    serde_json::Value::Array(events.to_vec()).to_string()
}

// ---------------------------------------------------------------------------
// In-memory source
// ---------------------------------------------------------------------------

/// Deterministic `OddsSource` for tests that do not need HTTP.
pub struct StubOddsSource {
    configured: bool,
    events: Vec<OddsEvent>,
    /// If set, `fetch_upcoming` fails with this HTTP status and message.
    force_error: Option<(u16, String)>,
    calls: Mutex<u32>,
}

impl StubOddsSource {
    pub fn unconfigured() -> Self {
        Self { configured: false, events: Vec::new(), force_error: None, calls: Mutex::new(0) }
    }

    pub fn with_events(events: Vec<OddsEvent>) -> Self {
        Self { configured: true, events, force_error: None, calls: Mutex::new(0) }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            configured: true,
            events: Vec::new(),
            force_error: Some((status, message.to_string())),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl OddsSource for StubOddsSource {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn fetch_upcoming(&self) -> Result<Vec<OddsEvent>, OddsError> {
        *self.calls.lock().unwrap() += 1;
        if let Some((status, message)) = &self.force_error {
            return Err(OddsError::Http { status: *status, message: message.clone() });
        }
        Ok(self.events.clone())
    }
}

/// Parse provider JSON values into raw events.
pub fn parse_events(events: &[serde_json::Value]) -> Vec<OddsEvent> {
    serde_json::from_str(&events_body(events)).unwrap()
}
