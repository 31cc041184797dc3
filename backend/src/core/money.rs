//! Monetary helpers shared by the calculator and the settlement engine
//!
//! All money in the engine is `f64` in session currency units. Exact equality
//! is never used on money; every comparison goes through a tolerance.

/// Default tolerance for "negligible" amounts and the fixed imbalance threshold
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Round a monetary amount to 2 decimal places
///
/// # Example
/// ```
/// use poker_settle_core::core::money::round_to_cents;
///
/// assert_eq!(round_to_cents(10.004), 10.0);
/// assert_eq!(round_to_cents(-3.336), -3.34);
/// ```
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// True when `amount` is strictly within `tolerance` of zero
pub fn is_negligible(amount: f64, tolerance: f64) -> bool {
    amount.abs() < tolerance
}

/// Sum in iteration order
///
/// Kept as a named helper so every imbalance figure in the crate is summed
/// the same way (left to right, input order).
pub fn total<I>(amounts: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    amounts.into_iter().fold(0.0, |acc, x| acc + x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents_half_values() {
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(20.0), 20.0);
        assert_eq!(round_to_cents(-0.004), -0.0);
    }

    #[test]
    fn test_is_negligible_is_strict() {
        assert!(is_negligible(0.0099, DEFAULT_TOLERANCE));
        assert!(is_negligible(-0.0099, DEFAULT_TOLERANCE));
        assert!(!is_negligible(0.02, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_total_preserves_sign() {
        assert_eq!(total(vec![30.0, -10.0, -20.0]), 0.0);
        assert_eq!(total(Vec::<f64>::new()), 0.0);
    }
}
