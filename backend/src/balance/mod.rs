//! Balance Calculator
//!
//! Converts raw participant inputs (buy-in plus counted tokens) into signed
//! net balances using a denomination table restricted to the active set.
//!
//! # Rules
//!
//! - token total = Σ `count[d] * table[d]` over `d` in `active` (active order)
//! - counts for inactive denominations are ignored
//! - active denominations missing from the table contribute 0
//! - raw balance = token total − buy-in
//! - negative buy-ins or counts are not rejected here; they propagate
//!
//! # Example
//!
//! ```rust
//! use poker_settle_core::{ActiveDenominations, DenominationTable, ParticipantInput};
//! use poker_settle_core::balance::compute_balances;
//!
//! let table = DenominationTable::new([("white", 0.25), ("red", 0.5)]).unwrap();
//! let active = ActiveDenominations::new(["white", "red"]).unwrap();
//! let alice = ParticipantInput::new("A", 10.0)
//!     .with_count("white", 4)
//!     .with_count("black", 100); // not active, ignored
//!
//! let balances = compute_balances(&[alice], &table, &active);
//! assert_eq!(balances[0].token_total(), 1.0);
//! assert_eq!(balances[0].raw_balance(), -9.0);
//! ```

use tracing::{trace, warn};

use crate::models::{ActiveDenominations, DenominationTable, ParticipantBalance, ParticipantInput};

/// Value of one participant's counted tokens
pub fn token_total(
    participant: &ParticipantInput,
    table: &DenominationTable,
    active: &ActiveDenominations,
) -> f64 {
    active
        .iter()
        .filter_map(|d| table.value(d).map(|value| participant.count(d) as f64 * value))
        .fold(0.0, |acc, x| acc + x)
}

/// Derive the balance record for a single participant
pub fn compute_balance(
    participant: &ParticipantInput,
    table: &DenominationTable,
    active: &ActiveDenominations,
) -> ParticipantBalance {
    let total = token_total(participant, table, active);

    if participant.buy_in() < 0.0 || participant.counts().values().any(|c| *c < 0) {
        warn!(
            participant = participant.name(),
            buy_in = participant.buy_in(),
            "negative buy-in or token count"
        );
    }

    let balance = ParticipantBalance::new(participant.name(), participant.buy_in(), total);
    trace!(
        participant = balance.name(),
        token_total = balance.token_total(),
        raw_balance = balance.raw_balance(),
        "computed balance"
    );
    balance
}

/// Derive balances for every participant, preserving input order
///
/// Names are not de-duplicated here; callers guarantee uniqueness.
pub fn compute_balances(
    participants: &[ParticipantInput],
    table: &DenominationTable,
    active: &ActiveDenominations,
) -> Vec<ParticipantBalance> {
    for denomination in active.iter().filter(|d| !table.contains(d)) {
        warn!(denomination, "active denomination has no value; counts as 0");
    }

    participants
        .iter()
        .map(|p| compute_balance(p, table, active))
        .collect()
}
