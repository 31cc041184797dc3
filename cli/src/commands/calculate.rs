//! `poker-settle calculate` command implementation

use anyhow::{Context, Result};
use poker_settle_core::engine::{self, SettlementRequest};
use poker_settle_core::SettlementConfig;
use std::path::PathBuf;

use super::{emit, read_input};

pub fn run(input: Option<PathBuf>, config: &SettlementConfig, pretty: bool) -> Result<()> {
    let body = read_input(input)?;
    let request = SettlementRequest::from_json(&body).context("Failed to parse settlement request JSON")?;

    tracing::info!(
        participants = request.participants.len(),
        denominations = request.denominations.len(),
        "calculating settlement"
    );

    emit(engine::calculate(&request, config), pretty)
}
