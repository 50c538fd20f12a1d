//! Resolve one duel and print its log.

use anyhow::Result;
use clap::Parser;
use console::style;
use duel_core::{CombatEngine, CombatReport, FighterProfile, Seed, Side, encode};

use super::{print_header, print_rounds, reject};
use crate::args::{ContentArgs, MatchupArgs, parse_seed};

/// Resolve one duel and print its log
#[derive(Parser)]
pub struct Simulate {
    #[command(flatten)]
    content: ContentArgs,

    #[command(flatten)]
    matchup: MatchupArgs,

    /// Seed as up to 64 hex digits
    #[arg(short, long, value_name = "HEX", value_parser = parse_seed)]
    seed: Seed,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Fighters, verdict and a round table
    Summary,
    /// Full report as JSON
    Json,
    /// Encoded action log as hex
    Hex,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let (content, [one, two]) = self.matchup.resolve(&self.content)?;
        let report = CombatEngine::new(&content.rules)
            .simulate(&one, &two, self.seed)
            .map_err(reject)?;

        tracing::info!(
            winner = %report.winner(),
            condition = %report.condition(),
            rounds = report.log.rounds(),
            "duel resolved"
        );

        match self.format {
            OutputFormat::Summary => print_summary(&one, &two, &report),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Hex => println!("{}", hex::encode(encode(&report.log))),
        }
        Ok(())
    }
}

fn print_summary(one: &FighterProfile, two: &FighterProfile, report: &CombatReport) {
    for (side, profile) in [(Side::One, one), (Side::Two, two)] {
        let loadout = profile.loadout;
        println!(
            "{} {} {} {} | hp {} st {} tempo {} init {}",
            style(format!("Side {side}:")).bold().cyan(),
            loadout.weapon,
            loadout.armor,
            loadout.stance,
            profile.stats.max_health,
            profile.stats.max_endurance,
            profile.tempo(),
            profile.effective_initiative(),
        );
    }
    println!("{} side {}", style("Opener:").bold().cyan(), report.opener);
    print_header(&report.log);
    print_rounds(report.rounds().map(|(action, trace)| (action, Some(trace))));
    println!();
    println!(
        "{} one {} / two {}",
        style("Attacks:").bold().yellow(),
        report.attacks_by(Side::One),
        report.attacks_by(Side::Two)
    );
}
