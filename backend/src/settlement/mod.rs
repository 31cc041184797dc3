//! Settlement Module
//!
//! Turns a set of signed participant balances into payer→receiver
//! transactions:
//!
//! 1. Residual redistribution (spread group-wide imbalance evenly)
//! 2. Partition into debtors and creditors
//! 3. Greedy two-pointer matching
//! 4. Summary assembly
//!
//! # Critical Invariants
//!
//! 1. **Zero-sum**: when redistribution runs, adjusted balances sum to ≈0
//! 2. **Closure**: every debtor's debt and every creditor's credit is matched
//! 3. **No self-payment**: payer != receiver for every transaction
//! 4. **Purity**: inputs are never mutated; no partial result on failure
//!
//! # Example
//!
//! ```rust
//! use poker_settle_core::ParticipantBalance;
//! use poker_settle_core::settlement::{settle, Tolerances};
//!
//! let balances = vec![
//!     ParticipantBalance::from_net("A", 30.0),
//!     ParticipantBalance::from_net("B", -10.0),
//!     ParticipantBalance::from_net("C", -20.0),
//! ];
//!
//! let result = settle(&balances, &Tolerances::default()).unwrap();
//! assert_eq!(result.transactions.len(), 2);
//! assert_eq!(result.transactions[0].payer(), "B");
//! assert_eq!(result.transactions[1].amount(), 20.0);
//! assert_eq!(result.final_imbalance, 0.0);
//! ```

pub mod greedy;
pub mod policy;
pub mod redistribution;

use serde::{Deserialize, Serialize};

use crate::core::money::{round_to_cents, total};
use crate::models::{ParticipantBalance, Transaction, ValidationError};

// Re-export public API
pub use greedy::{greedy_settle, match_positions, partition, Position};
pub use policy::{ImbalanceThreshold, SettlementConfig, Tolerances};
pub use redistribution::{redistribute, total_imbalance, Redistribution};

/// Output of one settlement run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResult {
    /// Payment instructions, in matching order
    pub transactions: Vec<Transaction>,

    /// Σ raw balances before redistribution (2 dp)
    pub original_imbalance: f64,

    /// Σ adjusted balances (2 dp); ≈0 when redistribution ran
    pub final_imbalance: f64,

    /// Amount added to every participant's raw balance (0 when not applied)
    pub adjustment: f64,

    /// Whether the rounded original imbalance exceeds the reporting threshold
    pub has_imbalance: bool,

    /// One row per participant, input order
    pub summary: Vec<ParticipantBalance>,
}

/// Settle a set of balances
///
/// # Errors
///
/// `ValidationError::EmptyInput` when `balances` is empty and
/// `ValidationError::NonFiniteBalance` when a balance or the group sum is
/// infinite or NaN. No partial result is returned.
pub fn settle(
    balances: &[ParticipantBalance],
    tolerances: &Tolerances,
) -> Result<SettlementResult, ValidationError> {
    let redistribution = redistribute(balances, tolerances.redistribute_above)?;

    let transactions = greedy_settle(&redistribution.balances, tolerances.negligible);

    let final_imbalance = total(
        redistribution
            .balances
            .iter()
            .map(ParticipantBalance::adjusted_balance),
    );

    let original_imbalance = round_to_cents(redistribution.imbalance);

    Ok(SettlementResult {
        transactions,
        original_imbalance,
        final_imbalance: round_to_cents(final_imbalance),
        adjustment: redistribution.adjustment,
        has_imbalance: original_imbalance.abs() > tolerances.reporting_threshold(),
        summary: redistribution.balances,
    })
}
