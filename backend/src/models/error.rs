//! Validation errors raised at the request boundary
//!
//! Every variant identifies the offending field so delivery surfaces can
//! report it without string matching.

use thiserror::Error;

/// Errors that reject a settlement request before any computation runs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Denomination '{denomination}' must have a positive value, got {value}")]
    NonPositiveDenomination { denomination: String, value: f64 },

    #[error("At least one denomination must be active")]
    NoActiveDenominations,

    /// Zero participants. Checked explicitly so redistribution never divides by zero.
    #[error("Participant list is empty")]
    EmptyInput,

    #[error("Duplicate participant name '{name}'")]
    DuplicateParticipant { name: String },

    #[error("Participant '{name}' has a non-finite amount")]
    NonFiniteBuyIn { name: String },

    /// A token total, balance or the group sum overflowed to infinity or NaN
    #[error("Participant '{name}' has a non-finite balance")]
    NonFiniteBalance { name: String },

    #[error("Invalid settlement config: {0}")]
    InvalidConfig(String),
}

impl ValidationError {
    /// Name of the request field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NonPositiveDenomination { .. } => "denominations",
            ValidationError::NoActiveDenominations => "active",
            ValidationError::EmptyInput => "participants",
            ValidationError::DuplicateParticipant { .. } => "participants.name",
            ValidationError::NonFiniteBuyIn { .. } => "participants.buyIn",
            ValidationError::NonFiniteBalance { .. } => "participants",
            ValidationError::InvalidConfig(_) => "config",
        }
    }

    /// True for the empty-participant case
    pub fn is_empty_input(&self) -> bool {
        matches!(self, ValidationError::EmptyInput)
    }
}
