//! Command implementations for the duel CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod decode;
mod simulate;
mod stats;
mod sweep;

pub use decode::Decode;
pub use simulate::Simulate;
pub use stats::Stats;
pub use sweep::Sweep;

use console::style;
use duel_core::{ActionOutcome, CombatAction, CombatLog, GameError, RoundTrace, Side};

/// Logs a core error with its code and severity before handing it to anyhow.
fn reject<E>(error: E) -> anyhow::Error
where
    E: GameError + std::error::Error + Send + Sync + 'static,
{
    tracing::error!(
        code = error.error_code(),
        severity = error.severity().as_str(),
        "{error}"
    );
    error.into()
}

fn print_header(log: &CombatLog) {
    println!(
        "{} side {} by {}",
        style("Winner:").bold().cyan(),
        style(log.winner).bold(),
        log.condition
    );
    println!("{} {}", style("Rounds:").bold().cyan(), log.rounds());
    println!();
}

/// Prints one line per round. The trace, when present, adds the attacking
/// side and both pools after the round.
fn print_rounds<'a>(rounds: impl Iterator<Item = (&'a CombatAction, Option<&'a RoundTrace>)>) {
    println!("{}", style("=== Rounds ===").bold().green());
    for (number, (action, trace)) in rounds.enumerate() {
        let attacker = trace.map_or_else(|| "?".to_string(), |t| t.attacker.to_string());
        print!(
            "  {:>2}  {:>3}  {}  vs  {}",
            number + 1,
            attacker,
            outcome(&action.attacker),
            outcome(&action.defender)
        );
        match trace {
            Some(trace) => println!(
                "   hp {:>4}/{:<4} st {:>4}/{:<4}",
                trace.health[Side::One.index()],
                trace.health[Side::Two.index()],
                trace.stamina[Side::One.index()],
                trace.stamina[Side::Two.index()],
            ),
            None => println!(),
        }
    }
}

fn outcome(outcome: &ActionOutcome) -> String {
    format!(
        "{:<12} {:>4} dmg {:>3} st",
        outcome.result.as_ref(),
        outcome.damage,
        outcome.stamina
    )
}
