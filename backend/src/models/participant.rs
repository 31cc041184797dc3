//! Participant models
//!
//! `ParticipantInput` is what the caller hands in (buy-in plus counted
//! tokens). `ParticipantBalance` is derived from it and carries both the raw
//! balance and the adjusted balance as distinct values; the settlement
//! engine builds new records instead of rewriting existing ones.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Raw per-participant input for one settlement request
///
/// `buy_in` and `counts` default to zero/empty when absent from a payload.
///
/// # Example
/// ```
/// use poker_settle_core::ParticipantInput;
///
/// let alice = ParticipantInput::new("alice", 10.0)
///     .with_count("white", 4)
///     .with_count("red", 2);
/// assert_eq!(alice.count("white"), 4);
/// assert_eq!(alice.count("black"), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantInput {
    name: String,

    #[serde(default)]
    buy_in: f64,

    /// Token counts by denomination. Signed so negative counts propagate
    /// arithmetically instead of failing to parse.
    #[serde(default)]
    counts: HashMap<String, i64>,
}

impl ParticipantInput {
    pub fn new(name: impl Into<String>, buy_in: f64) -> Self {
        Self {
            name: name.into(),
            buy_in,
            counts: HashMap::new(),
        }
    }

    /// Set the count for one denomination (builder style)
    pub fn with_count(mut self, denomination: impl Into<String>, count: i64) -> Self {
        self.counts.insert(denomination.into(), count);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn buy_in(&self) -> f64 {
        self.buy_in
    }

    /// Count for a denomination, 0 when absent
    pub fn count(&self, denomination: &str) -> i64 {
        self.counts.get(denomination).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &HashMap<String, i64> {
        &self.counts
    }
}

/// Derived monetary position of one participant
///
/// Serialises as the per-participant summary row:
/// `{name, buyIn, tokenTotal, rawBalance, adjustedBalance}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantBalance {
    name: String,
    buy_in: f64,
    token_total: f64,
    raw_balance: f64,
    adjusted_balance: f64,
}

impl ParticipantBalance {
    /// Balance from valued tokens; adjusted starts equal to raw
    pub fn new(name: impl Into<String>, buy_in: f64, token_total: f64) -> Self {
        let raw_balance = token_total - buy_in;
        Self {
            name: name.into(),
            buy_in,
            token_total,
            raw_balance,
            adjusted_balance: raw_balance,
        }
    }

    /// Balance for a participant whose net gain/loss is already known
    ///
    /// Buy-in and token total are reported as 0 and the amount itself.
    ///
    /// # Example
    /// ```
    /// use poker_settle_core::ParticipantBalance;
    ///
    /// let b = ParticipantBalance::from_net("bob", -10.0);
    /// assert_eq!(b.raw_balance(), -10.0);
    /// assert_eq!(b.adjusted_balance(), -10.0);
    /// ```
    pub fn from_net(name: impl Into<String>, net: f64) -> Self {
        Self::new(name, 0.0, net)
    }

    /// New record with `adjustment` added on top of the raw balance
    pub fn adjusted_by(&self, adjustment: f64) -> Self {
        Self {
            adjusted_balance: self.raw_balance + adjustment,
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn buy_in(&self) -> f64 {
        self.buy_in
    }

    pub fn token_total(&self) -> f64 {
        self.token_total
    }

    pub fn raw_balance(&self) -> f64 {
        self.raw_balance
    }

    pub fn adjusted_balance(&self) -> f64 {
        self.adjusted_balance
    }
}
