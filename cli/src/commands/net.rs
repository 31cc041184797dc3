//! `poker-settle net` command implementation

use anyhow::{Context, Result};
use poker_settle_core::engine::{self, NetSettlementRequest};
use poker_settle_core::SettlementConfig;
use std::path::PathBuf;

use super::{emit, read_input};

pub fn run(input: Option<PathBuf>, config: &SettlementConfig, pretty: bool) -> Result<()> {
    let body = read_input(input)?;
    let request = NetSettlementRequest::from_json(&body).context("Failed to parse net balances JSON")?;

    tracing::info!(participants = request.friends.len(), "settling net balances");

    emit(engine::calculate_net(&request, config), pretty)
}
