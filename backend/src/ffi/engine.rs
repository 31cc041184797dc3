//! PyO3 wrappers for the settlement pipeline
//!
//! # Example (from Python)
//!
//! ```python
//! from poker_settle_core import calculate, settle_net
//!
//! result = calculate({
//!     "participants": [
//!         {"name": "alice", "buyIn": 20, "counts": {"red": 60}},
//!         {"name": "bob", "buyIn": 20, "counts": {"red": 20}},
//!     ],
//!     "denominations": {"red": 0.5},
//!     "active": ["red"],
//! })
//! print(result["transactions"])  # [{'payer': 'bob', 'receiver': 'alice', 'amount': 10.0}]
//!
//! settle_net([("A", 30.0), ("B", -10.0), ("C", -20.0)], {"threshold": "never"})
//! ```

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{
    parse_settlement_config, parse_settlement_request, settlement_result_to_py,
    validation_error_to_py,
};
use crate::engine::{self as rust_engine, NetSettlementRequest};

/// Validate, value and settle a token-counted session
///
/// # Errors
///
/// Raises ValueError if:
/// - Required fields are missing or have the wrong type
/// - Any request validation rule fails
#[pyfunction]
#[pyo3(signature = (request, config=None))]
pub fn calculate<'py>(
    py: Python<'py>,
    request: &Bound<'py, PyDict>,
    config: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyDict>> {
    let rust_request = parse_settlement_request(request)?;
    let rust_config = parse_settlement_config(config)?;

    let result =
        rust_engine::calculate(&rust_request, &rust_config).map_err(validation_error_to_py)?;

    settlement_result_to_py(py, &result)
}

/// Settle already-net balances given as `(name, amount)` pairs
#[pyfunction]
#[pyo3(signature = (friends, config=None))]
pub fn settle_net<'py>(
    py: Python<'py>,
    friends: Vec<(String, f64)>,
    config: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyDict>> {
    let rust_config = parse_settlement_config(config)?;
    let request = NetSettlementRequest { friends };

    let result =
        rust_engine::calculate_net(&request, &rust_config).map_err(validation_error_to_py)?;

    settlement_result_to_py(py, &result)
}
