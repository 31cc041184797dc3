//! Command implementations and shared I/O helpers

pub mod calculate;
pub mod net;

use anyhow::{Context, Result};
use poker_settle_core::engine::ErrorEnvelope;
use poker_settle_core::{ImbalanceThreshold, SettlementConfig, SettlementResult, ValidationError};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

/// Load the settlement config, applying a `--threshold` override
///
/// Without a config file the defaults apply.
pub fn load_config(
    path: Option<PathBuf>,
    threshold: Option<ImbalanceThreshold>,
) -> Result<SettlementConfig> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        }
        None => SettlementConfig::default(),
    };

    if let Some(threshold) = threshold {
        config.imbalance_threshold = threshold;
    }

    config.validate()?;
    Ok(config)
}

/// Parse `fixed:<amount>`, `half-smallest`, `smallest` or `never`
pub fn parse_threshold(value: &str) -> Result<ImbalanceThreshold, String> {
    match value {
        "half-smallest" => Ok(ImbalanceThreshold::HalfSmallestDenomination),
        "smallest" => Ok(ImbalanceThreshold::SmallestDenomination),
        "never" => Ok(ImbalanceThreshold::Never),
        other => match other.strip_prefix("fixed:") {
            Some(amount) => amount
                .parse::<f64>()
                .map(ImbalanceThreshold::Fixed)
                .map_err(|e| format!("invalid fixed threshold '{}': {}", amount, e)),
            None => Err(format!(
                "unknown threshold '{}' (expected fixed:<amount>, half-smallest, smallest or never)",
                other
            )),
        },
    }
}

/// Read the request body from a file, or stdin when no path is given
pub fn read_input(path: Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read request file: {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

/// Print the result, or the `{"error": ...}` envelope and fail
pub fn emit(result: Result<SettlementResult, ValidationError>, pretty: bool) -> Result<()> {
    match result {
        Ok(result) => print_json(&result, pretty),
        Err(err) => {
            tracing::warn!(field = err.field(), "request rejected: {}", err);
            print_json(&ErrorEnvelope::new(&err), pretty)?;
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold_variants() {
        assert_eq!(parse_threshold("fixed:0.5"), Ok(ImbalanceThreshold::Fixed(0.5)));
        assert_eq!(parse_threshold("smallest"), Ok(ImbalanceThreshold::SmallestDenomination));
        assert_eq!(parse_threshold("never"), Ok(ImbalanceThreshold::Never));
        assert!(parse_threshold("fixed:abc").is_err());
        assert!(parse_threshold("always").is_err());
    }

    #[test]
    fn test_load_config_defaults_with_override() {
        let config = load_config(None, Some(ImbalanceThreshold::Never)).unwrap();
        assert_eq!(config.imbalance_threshold, ImbalanceThreshold::Never);
        assert_eq!(config.negligible_amount, 0.01);
    }

    #[test]
    fn test_load_config_rejects_negative_fixed_threshold() {
        assert!(load_config(None, Some(ImbalanceThreshold::Fixed(-1.0))).is_err());
    }
}
