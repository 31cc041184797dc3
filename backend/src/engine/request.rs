//! Request payloads accepted by the settlement pipeline
//!
//! Field names follow the JSON shape delivery layers receive
//! (`buyIn`, `counts`, `denominations`, `active`, `friends`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::ParticipantInput;

/// Token-valued settlement request
///
/// Denominations and the active set are kept unvalidated here so that
/// [`validate_request`](super::validation::validate_request) can report
/// failures in a fixed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementRequest {
    #[serde(default)]
    pub participants: Vec<ParticipantInput>,

    #[serde(default)]
    pub denominations: HashMap<String, f64>,

    #[serde(default)]
    pub active: Vec<String>,
}

impl SettlementRequest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Settlement request for balances that are already net gain/loss figures
///
/// Accepts `{"friends": [["alice", 30.0], ["bob", -30.0]]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetSettlementRequest {
    #[serde(default)]
    pub friends: Vec<(String, f64)>,
}

impl NetSettlementRequest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Failure payload returned to callers: `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl std::fmt::Display) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
