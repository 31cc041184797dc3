//! Poker Settle Core - Rust Engine
//!
//! Balance-settlement engine for poker sessions: turns buy-ins and counted
//! tokens into a short list of payer→receiver payments.
//!
//! # Architecture
//!
//! - **core**: Monetary rounding and tolerances
//! - **models**: Domain types (denominations, participants, transactions)
//! - **balance**: Balance calculator (tokens + buy-in → signed balance)
//! - **settlement**: Redistribution and greedy matching
//! - **engine**: Request validation and the end-to-end pipeline
//!
//! # Critical Invariants
//!
//! 1. All money values are f64; comparisons always go through a tolerance
//! 2. Every call is pure and deterministic (same input order → same output)
//! 3. Invalid requests are rejected before any computation
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod balance;
pub mod core;
pub mod engine;
pub mod models;
pub mod settlement;

// Re-exports for convenience
pub use balance::{compute_balance, compute_balances};
pub use engine::{calculate, calculate_net, NetSettlementRequest, SettlementRequest};
pub use models::{
    ActiveDenominations, DenominationTable, ParticipantBalance, ParticipantInput, Transaction,
    TransactionError, ValidationError,
};
pub use settlement::{
    settle, ImbalanceThreshold, SettlementConfig, SettlementResult, Tolerances,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn poker_settle_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::engine::calculate, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::engine::settle_net, m)?)?;
    Ok(())
}
