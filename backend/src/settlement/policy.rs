//! Settlement tolerance policy
//!
//! The threshold that triggers residual redistribution is configurable:
//! a fixed amount, half the smallest active denomination, the full smallest
//! active denomination, or never. `SettlementConfig::tolerances` resolves the
//! policy against one request's denominations into concrete `Tolerances`.

use serde::{Deserialize, Serialize};

use crate::core::money::DEFAULT_TOLERANCE;
use crate::models::{ActiveDenominations, DenominationTable, ValidationError};

/// When group-wide imbalance is large enough to redistribute
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ImbalanceThreshold {
    /// Redistribute when |imbalance| exceeds this amount
    Fixed(f64),

    /// Half the smallest active denomination value
    HalfSmallestDenomination,

    /// The smallest active denomination value
    SmallestDenomination,

    /// Never redistribute; adjusted balances always equal raw balances
    Never,
}

impl Default for ImbalanceThreshold {
    fn default() -> Self {
        ImbalanceThreshold::Fixed(DEFAULT_TOLERANCE)
    }
}

/// Configuration for a settlement run
///
/// # Example
/// ```
/// use poker_settle_core::{ImbalanceThreshold, SettlementConfig};
///
/// let config = SettlementConfig::default();
/// assert_eq!(config.imbalance_threshold, ImbalanceThreshold::Fixed(0.01));
/// assert_eq!(config.negligible_amount, 0.01);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementConfig {
    /// Redistribution trigger policy
    pub imbalance_threshold: ImbalanceThreshold,

    /// Amounts below this are treated as zero when partitioning and matching
    pub negligible_amount: f64,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            imbalance_threshold: ImbalanceThreshold::default(),
            negligible_amount: DEFAULT_TOLERANCE,
        }
    }
}

impl SettlementConfig {
    /// Reject negative or non-finite tolerances
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.negligible_amount.is_finite() || self.negligible_amount < 0.0 {
            return Err(ValidationError::InvalidConfig(format!(
                "negligible_amount must be a non-negative number, got {}",
                self.negligible_amount
            )));
        }

        if let ImbalanceThreshold::Fixed(amount) = self.imbalance_threshold {
            if !amount.is_finite() || amount < 0.0 {
                return Err(ValidationError::InvalidConfig(format!(
                    "fixed imbalance threshold must be a non-negative number, got {}",
                    amount
                )));
            }
        }

        Ok(())
    }

    /// Resolve the policy against the denominations of one request
    ///
    /// Denomination-based policies fall back to the default tolerance when no
    /// active denomination has a value.
    pub fn tolerances(
        &self,
        table: &DenominationTable,
        active: &ActiveDenominations,
    ) -> Tolerances {
        let smallest = table.smallest_active_value(active);
        let redistribute_above = match self.imbalance_threshold {
            ImbalanceThreshold::Fixed(amount) => Some(amount),
            ImbalanceThreshold::HalfSmallestDenomination => {
                Some(smallest.map_or(DEFAULT_TOLERANCE, |v| v / 2.0))
            }
            ImbalanceThreshold::SmallestDenomination => Some(smallest.unwrap_or(DEFAULT_TOLERANCE)),
            ImbalanceThreshold::Never => None,
        };

        Tolerances {
            redistribute_above,
            negligible: self.negligible_amount,
        }
    }

    /// Resolve the policy for already-net balances (no denomination table)
    pub fn net_tolerances(&self) -> Tolerances {
        let redistribute_above = match self.imbalance_threshold {
            ImbalanceThreshold::Fixed(amount) => Some(amount),
            ImbalanceThreshold::HalfSmallestDenomination
            | ImbalanceThreshold::SmallestDenomination => Some(DEFAULT_TOLERANCE),
            ImbalanceThreshold::Never => None,
        };

        Tolerances {
            redistribute_above,
            negligible: self.negligible_amount,
        }
    }
}

/// Concrete tolerances used by one call to [`settle`](crate::settlement::settle)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Redistribution threshold; `None` disables redistribution
    pub redistribute_above: Option<f64>,

    /// Negligible-amount tolerance for partitioning and matching
    pub negligible: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            redistribute_above: Some(DEFAULT_TOLERANCE),
            negligible: DEFAULT_TOLERANCE,
        }
    }
}

impl Tolerances {
    pub fn fixed(threshold: f64) -> Self {
        Self {
            redistribute_above: Some(threshold),
            ..Self::default()
        }
    }

    pub fn without_redistribution() -> Self {
        Self {
            redistribute_above: None,
            ..Self::default()
        }
    }

    /// Threshold that decides whether an imbalance is worth reporting
    pub fn reporting_threshold(&self) -> f64 {
        self.redistribute_above.unwrap_or(self.negligible)
    }
}
