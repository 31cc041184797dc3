//! Domain models for the settlement engine

pub mod denomination;
pub mod error;
pub mod participant;
pub mod transaction;

// Re-exports
pub use denomination::{ActiveDenominations, DenominationTable};
pub use error::ValidationError;
pub use participant::{ParticipantBalance, ParticipantInput};
pub use transaction::{Transaction, TransactionError};
