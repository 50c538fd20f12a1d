//! Developer tools for the duel engine.
//!
//! Run with: `cargo run -p duel-cli -- <command>`

mod args;
mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Decode, Simulate, Stats, Sweep};

/// Developer tools for the duel engine
#[derive(Parser)]
#[command(name = "duel")]
#[command(about = "Simulate, inspect and sweep deterministic duels", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Resolve one duel and print its log
    Simulate(Simulate),

    /// Decode a hex-encoded combat log
    Decode(Decode),

    /// Print the derived profile of a fighter
    Stats(Stats),

    /// Run a matchup over consecutive seeds and report win rates
    Sweep(Sweep),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate(cmd) => cmd.execute(),
        Command::Decode(cmd) => cmd.execute(),
        Command::Stats(cmd) => cmd.execute(),
        Command::Sweep(cmd) => cmd.execute(),
    }
}
