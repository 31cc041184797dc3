//! Greedy two-pointer matching
//!
//! Pairs debtors with creditors in input order:
//!
//! ```text
//! debtors:   B(10) C(20)          creditors: A(30)
//!            ^i                              ^j
//! step 1: min(10, 30) = 10  → B pays A 10.00, B closed (i+1)
//! step 2: min(20, 20) = 20  → C pays A 20.00, both closed
//! ```
//!
//! # Guarantees
//!
//! - Closure: every debt and every credit is driven below the negligible
//!   tolerance when the balances sum to zero.
//! - Termination: `amount` is the minimum of both sides, so at least one
//!   side reaches exactly zero each iteration and its cursor advances.
//!   A NaN remainder also counts as closed. The loop runs at most
//!   `debtors + creditors` times.
//! - Determinism: output depends only on input order.
//!
//! The pass does NOT minimise the number of transactions.

use tracing::trace;

use crate::core::money::{is_negligible, round_to_cents};
use crate::models::{ParticipantBalance, Transaction};

/// A participant's outstanding position in the matching pass (always > 0)
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub name: String,
    pub amount: f64,
}

/// Split balances by sign of the adjusted balance
///
/// Returns `(debtors, creditors)`, each in input order, with debts stored as
/// positive amounts. Participants within `negligible` of zero are in neither.
pub fn partition(
    balances: &[ParticipantBalance],
    negligible: f64,
) -> (Vec<Position>, Vec<Position>) {
    let mut debtors = Vec::new();
    let mut creditors = Vec::new();

    for balance in balances {
        let amount = balance.adjusted_balance();
        if amount > negligible {
            creditors.push(Position {
                name: balance.name().to_string(),
                amount,
            });
        } else if amount < -negligible {
            debtors.push(Position {
                name: balance.name().to_string(),
                amount: -amount,
            });
        }
    }

    (debtors, creditors)
}

/// Run the two-pointer pass and emit transactions
///
/// Amounts that round to `negligible` or less are consumed without emitting
/// a transaction. A cursor advances once its remainder is within `negligible`
/// of zero.
pub fn match_positions(
    mut debtors: Vec<Position>,
    mut creditors: Vec<Position>,
    negligible: f64,
) -> Vec<Transaction> {
    let mut transactions = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let amount = debtors[i].amount.min(creditors[j].amount);

        if round_to_cents(amount) > negligible && debtors[i].name != creditors[j].name
        {
            let tx = Transaction::new(
                debtors[i].name.clone(),
                creditors[j].name.clone(),
                amount,
            );
            trace!(
                payer = tx.payer(),
                receiver = tx.receiver(),
                amount = tx.amount(),
                "transaction"
            );
            transactions.push(tx);
        }

        debtors[i].amount -= amount;
        creditors[j].amount -= amount;

        if is_settled(debtors[i].amount, negligible) {
            i += 1;
        }
        if is_settled(creditors[j].amount, negligible) {
            j += 1;
        }
    }

    transactions
}

/// Remainder closed: under tolerance, zero or below, or NaN
fn is_settled(remaining: f64, negligible: f64) -> bool {
    remaining.is_nan() || remaining <= 0.0 || is_negligible(remaining, negligible)
}

/// Partition then match in one call
pub fn greedy_settle(balances: &[ParticipantBalance], negligible: f64) -> Vec<Transaction> {
    let (debtors, creditors) = partition(balances, negligible);
    match_positions(debtors, creditors, negligible)
}
