//! Residual imbalance redistribution
//!
//! Token counts rarely match buy-ins exactly. When the group-wide sum of raw
//! balances exceeds the resolved threshold, the residual is spread evenly:
//! every participant receives `-imbalance / n` on top of their raw balance,
//! so the adjusted balances sum to (near) zero. Below the threshold the
//! adjusted balances are the raw balances, untouched.

use tracing::debug;

use crate::core::money::total;
use crate::models::{ParticipantBalance, ValidationError};

/// Outcome of a redistribution pass
#[derive(Debug, Clone, PartialEq)]
pub struct Redistribution {
    /// New balance records carrying the adjusted values, input order
    pub balances: Vec<ParticipantBalance>,

    /// Σ raw balances before any correction
    pub imbalance: f64,

    /// Amount added to each participant (0 when not applied)
    pub adjustment: f64,

    /// Whether the correction ran
    pub applied: bool,
}

/// Group-wide imbalance (Σ raw balances)
pub fn total_imbalance(balances: &[ParticipantBalance]) -> f64 {
    total(balances.iter().map(ParticipantBalance::raw_balance))
}

/// Spread residual imbalance evenly across participants
///
/// `threshold` of `None` disables redistribution entirely.
///
/// # Errors
///
/// `ValidationError::EmptyInput` when `balances` is empty.
/// `ValidationError::NonFiniteBalance` when a raw balance, the running sum
/// or an adjusted balance is infinite or NaN.
pub fn redistribute(
    balances: &[ParticipantBalance],
    threshold: Option<f64>,
) -> Result<Redistribution, ValidationError> {
    if balances.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let mut imbalance = 0.0_f64;
    for balance in balances {
        imbalance += balance.raw_balance();
        if !imbalance.is_finite() {
            return Err(non_finite(balance));
        }
    }

    let applied = threshold.is_some_and(|t| imbalance.abs() > t);

    let adjustment = if applied {
        -imbalance / balances.len() as f64
    } else {
        0.0
    };

    debug!(
        imbalance,
        threshold = threshold.unwrap_or(f64::NAN),
        applied,
        adjustment,
        participants = balances.len(),
        "residual redistribution"
    );

    // x + 0.0 == x, so an unapplied pass leaves adjusted == raw exactly
    let balances: Vec<ParticipantBalance> =
        balances.iter().map(|b| b.adjusted_by(adjustment)).collect();

    // Finite inputs can still overflow once the adjustment is added
    if let Some(balance) = balances.iter().find(|b| !b.adjusted_balance().is_finite()) {
        return Err(non_finite(balance));
    }

    Ok(Redistribution {
        balances,
        imbalance,
        adjustment,
        applied,
    })
}

fn non_finite(balance: &ParticipantBalance) -> ValidationError {
    ValidationError::NonFiniteBalance {
        name: balance.name().to_string(),
    }
}
