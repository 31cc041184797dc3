//! Transaction model
//!
//! One payer→receiver payment instruction produced by the matching pass.
//! Amounts are rounded to 2 decimal places on construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::money::round_to_cents;

/// Payment instruction between two participants
///
/// Deserialization goes through the same checks as [`Transaction::try_new`].
///
/// # Example
/// ```
/// use poker_settle_core::Transaction;
///
/// let tx = Transaction::new("bob", "alice", 10.004);
/// assert_eq!(tx.payer(), "bob");
/// assert_eq!(tx.receiver(), "alice");
/// assert_eq!(tx.amount(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord")]
pub struct Transaction {
    payer: String,
    receiver: String,
    amount: f64,
}

/// Unchecked wire shape of a [`Transaction`]
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    pub payer: String,
    pub receiver: String,
    pub amount: f64,
}

/// Errors from building a transaction
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransactionError {
    #[error("transaction amount must be positive")]
    NonPositiveAmount,

    #[error("payer and receiver must differ")]
    SelfPayment,
}

impl Transaction {
    /// Create a transaction, rounding `amount` to cents
    ///
    /// # Panics
    /// Panics if the rounded amount is not positive or if payer == receiver
    pub fn new(payer: impl Into<String>, receiver: impl Into<String>, amount: f64) -> Self {
        match Self::try_new(payer, receiver, amount) {
            Ok(tx) => tx,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`Transaction::new`]
    ///
    /// # Errors
    /// `NonPositiveAmount` if the rounded amount is not positive (NaN
    /// included), `SelfPayment` if payer == receiver.
    pub fn try_new(
        payer: impl Into<String>,
        receiver: impl Into<String>,
        amount: f64,
    ) -> Result<Self, TransactionError> {
        let payer = payer.into();
        let receiver = receiver.into();
        let amount = round_to_cents(amount);

        if amount.is_nan() || amount <= 0.0 {
            return Err(TransactionError::NonPositiveAmount);
        }
        if payer == receiver {
            return Err(TransactionError::SelfPayment);
        }

        Ok(Self {
            payer,
            receiver,
            amount,
        })
    }

    pub fn payer(&self) -> &str {
        &self.payer
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = TransactionError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        Transaction::try_new(record.payer, record.receiver, record.amount)
    }
}
