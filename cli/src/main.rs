//! Poker Settle CLI
//!
//! Reads a settlement request as JSON and prints the payments that settle it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use poker_settle_core::ImbalanceThreshold;
use std::path::PathBuf;

mod commands;

/// Settle a poker session: who pays whom, and how much
#[derive(Parser)]
#[command(name = "poker-settle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settlement config file path (JSON)
    #[arg(short, long, global = true, env = "POKER_SETTLE_CONFIG")]
    config: Option<PathBuf>,

    /// Redistribution threshold: fixed:<amount>, half-smallest, smallest or never
    #[arg(short, long, global = true, value_parser = commands::parse_threshold)]
    threshold: Option<ImbalanceThreshold>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value counted tokens against buy-ins and settle
    Calculate {
        /// Request file (JSON); reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Settle already-net balances: {"friends": [["name", amount], ...]}
    Net {
        /// Request file (JSON); reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so stdout stays machine-readable)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if cli.verbose { "debug" } else { "info" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config, cli.threshold)?;

    match cli.command {
        Commands::Calculate { input } => commands::calculate::run(input, &config, cli.pretty),
        Commands::Net { input } => commands::net::run(input, &config, cli.pretty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calculate_with_threshold() {
        let cli = Cli::try_parse_from([
            "poker-settle",
            "--threshold",
            "half-smallest",
            "calculate",
            "--input",
            "session.json",
        ])
        .unwrap();

        assert_eq!(cli.threshold, Some(ImbalanceThreshold::HalfSmallestDenomination));
        match cli.command {
            Commands::Calculate { input } => assert_eq!(input, Some(PathBuf::from("session.json"))),
            Commands::Net { .. } => panic!("expected calculate"),
        }
    }

    #[test]
    fn test_parse_net_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["poker-settle", "net", "--pretty"]).unwrap();

        assert!(cli.pretty);
        assert!(cli.threshold.is_none());
        assert!(matches!(cli.command, Commands::Net { input: None }));
    }

    #[test]
    fn test_rejects_unknown_threshold() {
        assert!(Cli::try_parse_from(["poker-settle", "-t", "sometimes", "net"]).is_err());
    }
}
