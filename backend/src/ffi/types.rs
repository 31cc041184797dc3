//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList, etc.)

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use std::collections::HashMap;

use crate::engine::SettlementRequest;
use crate::models::{ParticipantBalance, ParticipantInput, Transaction, ValidationError};
use crate::settlement::{ImbalanceThreshold, SettlementConfig, SettlementResult};

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with clear error messages.
///
/// # Errors
/// Returns PyValueError if the field is missing or type conversion fails
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("Missing required field '{}'", key)))?
        .extract()
}

/// Extract a field with a default value if missing.
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

/// Map a validation failure to `ValueError`
pub fn validation_error_to_py(err: ValidationError) -> PyErr {
    PyValueError::new_err(format!("{} (field: {})", err, err.field()))
}

// ========================================================================
// Request Parsers
// ========================================================================

/// Convert a Python dict to a SettlementRequest
///
/// Expected shape:
/// ```python
/// {
///     "participants": [{"name": "alice", "buyIn": 20.0, "counts": {"red": 60}}],
///     "denominations": {"red": 0.5},
///     "active": ["red"],
/// }
/// ```
pub fn parse_settlement_request(py_request: &Bound<'_, PyDict>) -> PyResult<SettlementRequest> {
    let py_participants: Bound<'_, PyList> = extract_required(py_request, "participants")?;

    let mut participants = Vec::with_capacity(py_participants.len());
    for item in py_participants.iter() {
        let py_participant = item.downcast::<PyDict>()?;
        participants.push(parse_participant(py_participant)?);
    }

    Ok(SettlementRequest {
        participants,
        denominations: extract_required(py_request, "denominations")?,
        active: extract_required(py_request, "active")?,
    })
}

fn parse_participant(py_participant: &Bound<'_, PyDict>) -> PyResult<ParticipantInput> {
    let name: String = extract_required(py_participant, "name")?;
    let buy_in: f64 = extract_with_default(py_participant, "buyIn", 0.0)?;
    let counts: HashMap<String, i64> = extract_with_default(py_participant, "counts", HashMap::new())?;

    Ok(counts
        .into_iter()
        .fold(ParticipantInput::new(name, buy_in), |p, (d, c)| p.with_count(d, c)))
}

/// Convert an optional Python dict to SettlementConfig
///
/// Recognised keys: `threshold` (`"half_smallest"`, `"smallest"`, `"never"`
/// or a number for a fixed amount) and `negligible_amount`.
pub fn parse_settlement_config(py_config: Option<&Bound<'_, PyDict>>) -> PyResult<SettlementConfig> {
    let Some(py_config) = py_config else {
        return Ok(SettlementConfig::default());
    };

    let defaults = SettlementConfig::default();
    let imbalance_threshold = match py_config.get_item("threshold")? {
        None => defaults.imbalance_threshold,
        Some(value) => match value.extract::<f64>() {
            Ok(amount) => ImbalanceThreshold::Fixed(amount),
            Err(_) => match value.extract::<String>()?.as_str() {
                "half_smallest" => ImbalanceThreshold::HalfSmallestDenomination,
                "smallest" => ImbalanceThreshold::SmallestDenomination,
                "never" => ImbalanceThreshold::Never,
                other => {
                    return Err(PyValueError::new_err(format!(
                        "Unknown threshold policy '{}'",
                        other
                    )))
                }
            },
        },
    };

    Ok(SettlementConfig {
        imbalance_threshold,
        negligible_amount: extract_with_default(
            py_config,
            "negligible_amount",
            defaults.negligible_amount,
        )?,
    })
}

// ========================================================================
// Result Converters
// ========================================================================

fn transaction_to_py<'py>(py: Python<'py>, tx: &Transaction) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("payer", tx.payer())?;
    dict.set_item("receiver", tx.receiver())?;
    dict.set_item("amount", tx.amount())?;
    Ok(dict)
}

fn balance_to_py<'py>(py: Python<'py>, balance: &ParticipantBalance) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("name", balance.name())?;
    dict.set_item("buyIn", balance.buy_in())?;
    dict.set_item("tokenTotal", balance.token_total())?;
    dict.set_item("rawBalance", balance.raw_balance())?;
    dict.set_item("adjustedBalance", balance.adjusted_balance())?;
    Ok(dict)
}

/// Convert SettlementResult to a Python dict (camelCase keys, like the JSON output)
pub fn settlement_result_to_py<'py>(
    py: Python<'py>,
    result: &SettlementResult,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);

    let transactions = PyList::empty(py);
    for tx in &result.transactions {
        transactions.append(transaction_to_py(py, tx)?)?;
    }
    dict.set_item("transactions", transactions)?;

    dict.set_item("originalImbalance", result.original_imbalance)?;
    dict.set_item("finalImbalance", result.final_imbalance)?;
    dict.set_item("adjustment", result.adjustment)?;
    dict.set_item("hasImbalance", result.has_imbalance)?;

    let summary = PyList::empty(py);
    for balance in &result.summary {
        summary.append(balance_to_py(py, balance)?)?;
    }
    dict.set_item("summary", summary)?;

    Ok(dict)
}
