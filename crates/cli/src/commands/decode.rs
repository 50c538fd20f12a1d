//! Decode a hex-encoded combat log.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use super::{print_header, print_rounds, reject};

/// Decode a hex-encoded combat log
#[derive(Parser)]
pub struct Decode {
    /// Encoded log as hex (whitespace and a 0x prefix are ignored)
    #[arg(value_name = "HEX")]
    log: String,

    /// Print the decoded log as JSON
    #[arg(long)]
    json: bool,
}

impl Decode {
    pub fn execute(self) -> Result<()> {
        let bytes = parse_hex(&self.log)?;
        let log = duel_core::decode(&bytes)
            .map_err(reject)
            .with_context(|| format!("Failed to decode {} byte log", bytes.len()))?;

        tracing::info!(
            winner = %log.winner,
            condition = %log.condition,
            rounds = log.rounds(),
            "log decoded"
        );

        if self.json {
            println!("{}", serde_json::to_string_pretty(&log)?);
            return Ok(());
        }

        println!("{} {} bytes", style("Log Size:").bold().cyan(), bytes.len());
        print_header(&log);
        print_rounds(log.actions.iter().map(|action| (action, None)));
        Ok(())
    }
}

fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let digits: String = input
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    hex::decode(&digits).context("Log is not valid hex")
}
