//! Run one matchup over many consecutive seeds.

use anyhow::Result;
use clap::Parser;
use console::style;
use duel_core::{CombatEngine, CombatReport, FighterProfile, Seed, Side, WinCondition};
use rayon::prelude::*;

use crate::args::{ContentArgs, MatchupArgs, parse_seed};

/// Run a matchup over consecutive seeds and report win rates
#[derive(Parser)]
pub struct Sweep {
    #[command(flatten)]
    content: ContentArgs,

    #[command(flatten)]
    matchup: MatchupArgs,

    /// First seed, as up to 64 hex digits
    #[arg(short, long, value_name = "HEX", value_parser = parse_seed, default_value = "0")]
    seed: Seed,

    /// Number of consecutive seeds to run
    #[arg(short = 'n', long, default_value_t = 1000)]
    seeds: u64,
}

impl Sweep {
    pub fn execute(self) -> Result<()> {
        anyhow::ensure!(self.seeds > 0, "--seeds must be at least 1");

        let (content, [one, two]) = self.matchup.resolve(&self.content)?;
        let engine = CombatEngine::new(&content.rules);
        let summary = run(&engine, &one, &two, self.seed, self.seeds)?;

        tracing::info!(
            seeds = summary.duels,
            wins_one = summary.wins[Side::One.index()],
            wins_two = summary.wins[Side::Two.index()],
            "sweep finished"
        );
        print_summary(&summary);
        Ok(())
    }
}

/// Aggregate outcome of a sweep.
#[derive(Debug, Default, PartialEq)]
struct SweepSummary {
    duels: u64,
    wins: [u64; 2],
    /// Indexed by win condition code.
    conditions: [u64; 3],
    total_rounds: u64,
    attacks: [u64; 2],
}

impl SweepSummary {
    fn record(mut self, report: &CombatReport) -> Self {
        self.duels += 1;
        self.wins[report.winner().index()] += 1;
        self.conditions[usize::from(report.condition().code())] += 1;
        self.total_rounds += report.log.rounds() as u64;
        for side in Side::BOTH {
            self.attacks[side.index()] += report.attacks_by(side) as u64;
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        self.duels += other.duels;
        self.total_rounds += other.total_rounds;
        for i in 0..2 {
            self.wins[i] += other.wins[i];
            self.attacks[i] += other.attacks[i];
        }
        for i in 0..3 {
            self.conditions[i] += other.conditions[i];
        }
        self
    }

    fn rate(&self, count: u64) -> f64 {
        if self.duels == 0 {
            return 0.0;
        }
        count as f64 * 100.0 / self.duels as f64
    }

    fn mean(&self, total: u64) -> f64 {
        if self.duels == 0 {
            return 0.0;
        }
        total as f64 / self.duels as f64
    }
}

fn run(
    engine: &CombatEngine<'_>,
    one: &FighterProfile,
    two: &FighterProfile,
    first: Seed,
    seeds: u64,
) -> Result<SweepSummary> {
    let summary = (0..seeds)
        .into_par_iter()
        .map(|i| engine.simulate(one, two, first.offset(i)))
        .try_fold(SweepSummary::default, |summary, report| {
            report.map(|report| summary.record(&report))
        })
        .try_reduce(SweepSummary::default, |a, b| Ok(a.merge(b)))
        .map_err(super::reject)?;
    Ok(summary)
}

fn print_summary(summary: &SweepSummary) {
    println!("{}", style("=== Sweep ===").bold().green());
    println!("  Duels: {}", summary.duels);
    for side in Side::BOTH {
        let wins = summary.wins[side.index()];
        println!(
            "  Side {side} wins: {wins} ({:.1}%), mean attacks {:.2}",
            summary.rate(wins),
            summary.mean(summary.attacks[side.index()])
        );
    }
    println!("  Mean rounds: {:.2}", summary.mean(summary.total_rounds));
    println!();

    println!("{}", style("Win Conditions:").bold().yellow());
    for condition in [
        WinCondition::Health,
        WinCondition::Exhaustion,
        WinCondition::MaxRounds,
    ] {
        let count = summary.conditions[usize::from(condition.code())];
        println!(
            "  {:<12}{count:>8} ({:.1}%)",
            condition.as_ref(),
            summary.rate(count)
        );
    }
}
