//! Shared primitives (monetary rounding and tolerances)

pub mod money;
