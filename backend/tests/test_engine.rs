//! End-to-end tests for the request pipeline
//!
//! Requests go in as JSON, the way delivery layers receive them.

use poker_settle_core::engine::{calculate, calculate_net, ErrorEnvelope};
use poker_settle_core::{
    ImbalanceThreshold, NetSettlementRequest, SettlementConfig, SettlementRequest,
    ValidationError,
};

fn request(json: &str) -> SettlementRequest {
    SettlementRequest::from_json(json).unwrap()
}

fn half_smallest() -> SettlementConfig {
    SettlementConfig {
        imbalance_threshold: ImbalanceThreshold::HalfSmallestDenomination,
        ..Default::default()
    }
}

#[test]
fn test_balanced_session() {
    let req = request(
        r#"{
            "participants": [
                {"name": "alice", "buyIn": 20, "counts": {"white": 40, "red": 40}},
                {"name": "bob",   "buyIn": 20, "counts": {"white": 20}},
                {"name": "carol", "buyIn": 20, "counts": {"red": 20}}
            ],
            "denominations": {"white": 0.25, "red": 0.5},
            "active": ["white", "red"]
        }"#,
    );

    let result = calculate(&req, &SettlementConfig::default()).unwrap();

    // alice 30 (+10), bob 5 (-15), carol 10 (-10): imbalance -15
    assert!(result.has_imbalance);
    assert_eq!(result.original_imbalance, -15.0);
    assert_eq!(result.adjustment, 5.0);
    assert_eq!(result.final_imbalance, 0.0);

    let summary: Vec<(&str, f64, f64)> = result
        .summary
        .iter()
        .map(|b| (b.name(), b.raw_balance(), b.adjusted_balance()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("alice", 10.0, 15.0),
            ("bob", -15.0, -10.0),
            ("carol", -10.0, -5.0)
        ]
    );

    let txs: Vec<(&str, &str, f64)> = result
        .transactions
        .iter()
        .map(|tx| (tx.payer(), tx.receiver(), tx.amount()))
        .collect();
    assert_eq!(txs, vec![("bob", "alice", 10.0), ("carol", "alice", 5.0)]);
}

#[test]
fn test_small_drift_below_half_chip_not_redistributed() {
    // alice's 9.95 buy-in leaves +0.05 of drift, below half a 0.25 chip
    let req = request(
        r#"{
            "participants": [
                {"name": "alice", "buyIn": 9.95, "counts": {"red": 40}},
                {"name": "bob",   "buyIn": 10},
                {"name": "carol", "buyIn": 5,  "counts": {"white": 20}}
            ],
            "denominations": {"red": 0.5, "white": 0.25},
            "active": ["red", "white"]
        }"#,
    );

    let result = calculate(&req, &half_smallest()).unwrap();

    assert!(!result.has_imbalance);
    assert_eq!(result.original_imbalance, 0.05);
    assert_eq!(result.adjustment, 0.0);
    for row in &result.summary {
        assert_eq!(row.adjusted_balance(), row.raw_balance());
    }
    assert_eq!(result.summary[2].adjusted_balance(), 0.0);

    let txs: Vec<(&str, &str, f64)> = result
        .transactions
        .iter()
        .map(|tx| (tx.payer(), tx.receiver(), tx.amount()))
        .collect();
    assert_eq!(txs, vec![("bob", "alice", 10.0)]);
}

#[test]
fn test_empty_participants_rejected() {
    let req = request(r#"{"participants": [], "denominations": {"red": 0.5}, "active": ["red"]}"#);

    let err = calculate(&req, &SettlementConfig::default()).unwrap_err();

    assert!(err.is_empty_input());
    assert_eq!(err.field(), "participants");
}

#[test]
fn test_non_positive_denomination_rejected() {
    let req = request(
        r#"{"participants": [{"name": "A"}], "denominations": {"red": -0.5}, "active": ["red"]}"#,
    );

    assert_eq!(
        calculate(&req, &SettlementConfig::default()),
        Err(ValidationError::NonPositiveDenomination {
            denomination: "red".to_string(),
            value: -0.5
        })
    );
}

#[test]
fn test_no_active_denominations_rejected() {
    let req = request(r#"{"participants": [{"name": "A"}], "denominations": {"red": 0.5}}"#);

    assert_eq!(
        calculate(&req, &SettlementConfig::default()),
        Err(ValidationError::NoActiveDenominations)
    );
}

#[test]
fn test_invalid_config_rejected() {
    let req = request(
        r#"{"participants": [{"name": "A"}], "denominations": {"red": 0.5}, "active": ["red"]}"#,
    );
    let config = SettlementConfig {
        negligible_amount: -1.0,
        ..Default::default()
    };

    assert!(matches!(
        calculate(&req, &config),
        Err(ValidationError::InvalidConfig(_))
    ));
}

#[test]
fn test_overflowing_token_total_rejected() {
    // 10 × 1e308 overflows to +inf and -10 × 1e308 to -inf
    let req = request(
        r#"{
            "participants": [
                {"name": "A", "counts": {"big": 10}},
                {"name": "B", "counts": {"big": -10}}
            ],
            "denominations": {"big": 1e308},
            "active": ["big"]
        }"#,
    );

    let err = calculate(&req, &SettlementConfig::default()).unwrap_err();

    assert_eq!(
        err,
        ValidationError::NonFiniteBalance {
            name: "A".to_string()
        }
    );
    assert_eq!(err.field(), "participants");
}

#[test]
fn test_net_friends_request() {
    let req = NetSettlementRequest::from_json(r#"{"friends": [["A", 30], ["B", -10], ["C", -20]]}"#)
        .unwrap();

    let result = calculate_net(&req, &SettlementConfig::default()).unwrap();

    let txs: Vec<(&str, &str, f64)> = result
        .transactions
        .iter()
        .map(|tx| (tx.payer(), tx.receiver(), tx.amount()))
        .collect();
    assert_eq!(txs, vec![("B", "A", 10.0), ("C", "A", 20.0)]);
    assert_eq!(result.final_imbalance, 0.0);
}

#[test]
fn test_net_request_empty_rejected() {
    let req = NetSettlementRequest::from_json(r#"{"friends": []}"#).unwrap();

    assert_eq!(
        calculate_net(&req, &SettlementConfig::default()),
        Err(ValidationError::EmptyInput)
    );
}

#[test]
fn test_result_json_shape() {
    let req = NetSettlementRequest::from_json(r#"{"friends": [["A", 5], ["B", -5]]}"#).unwrap();
    let result = calculate_net(&req, &SettlementConfig::default()).unwrap();

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["transactions"][0]["payer"], "B");
    assert_eq!(json["originalImbalance"], 0.0);
    assert_eq!(json["hasImbalance"], false);
    assert_eq!(json["summary"][0]["adjustedBalance"], 5.0);
}

#[test]
fn test_error_envelope_from_validation_error() {
    let envelope = ErrorEnvelope::new(ValidationError::EmptyInput);
    assert_eq!(envelope.error, "Participant list is empty");
}
