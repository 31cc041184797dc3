//! Request pipeline
//!
//! Wires boundary validation, the balance calculator and the settlement
//! engine together. Every call is independent: configuration and
//! denominations come in as parameters and nothing is retained afterwards.
//!
//! ```text
//! SettlementRequest ─► validate_request ─► compute_balances ─► settle ─► SettlementResult
//! ```
//!
//! # Example
//!
//! ```rust
//! use poker_settle_core::engine::{calculate, SettlementRequest};
//! use poker_settle_core::SettlementConfig;
//!
//! let request = SettlementRequest::from_json(r#"{
//!     "participants": [
//!         {"name": "alice", "buyIn": 20, "counts": {"red": 60}},
//!         {"name": "bob",   "buyIn": 20, "counts": {"red": 20}}
//!     ],
//!     "denominations": {"red": 0.5},
//!     "active": ["red"]
//! }"#).unwrap();
//!
//! let result = calculate(&request, &SettlementConfig::default()).unwrap();
//! assert_eq!(result.transactions.len(), 1);
//! assert_eq!(result.transactions[0].payer(), "bob");
//! assert_eq!(result.transactions[0].amount(), 10.0);
//! assert!(!result.has_imbalance);
//! ```

pub mod request;
pub mod validation;

use tracing::{debug, instrument};

use crate::balance::compute_balances;
use crate::models::{ParticipantBalance, ValidationError};
use crate::settlement::{settle, SettlementConfig, SettlementResult};

pub use request::{ErrorEnvelope, NetSettlementRequest, SettlementRequest};
pub use validation::{validate_net_request, validate_request};

/// Validate, compute balances and settle a token-valued request
///
/// # Errors
///
/// Any [`ValidationError`] from the config or the request. Nothing is
/// computed when validation fails.
#[instrument(skip_all, fields(participants = request.participants.len()))]
pub fn calculate(
    request: &SettlementRequest,
    config: &SettlementConfig,
) -> Result<SettlementResult, ValidationError> {
    config.validate()?;
    let (table, active) = validate_request(request)?;

    let balances = compute_balances(&request.participants, &table, &active);
    let tolerances = config.tolerances(&table, &active);
    debug!(?tolerances, "resolved tolerances");

    let result = settle(&balances, &tolerances)?;
    debug!(
        transactions = result.transactions.len(),
        original_imbalance = result.original_imbalance,
        has_imbalance = result.has_imbalance,
        "settled"
    );
    Ok(result)
}

/// Validate and settle already-net balances
///
/// Denomination-based threshold policies fall back to the default tolerance.
#[instrument(skip_all, fields(participants = request.friends.len()))]
pub fn calculate_net(
    request: &NetSettlementRequest,
    config: &SettlementConfig,
) -> Result<SettlementResult, ValidationError> {
    config.validate()?;
    validate_net_request(request)?;

    let balances: Vec<ParticipantBalance> = request
        .friends
        .iter()
        .map(|(name, amount)| ParticipantBalance::from_net(name.as_str(), *amount))
        .collect();

    let result = settle(&balances, &config.net_tolerances())?;
    debug!(
        transactions = result.transactions.len(),
        original_imbalance = result.original_imbalance,
        "settled net balances"
    );
    Ok(result)
}
