//! Combat simulator.
//!
//! [`CombatEngine`] runs a duel from two immutable profiles and a seed to a
//! [`CombatReport`]. It is the only place combat state is mutated.
//!
//! # State machine
//!
//! ```text
//! Init ──> RoundLoop ──> Terminated(Health | Exhaustion | MaxRounds)
//!            │  ▲
//!            └──┘  at most MAX_ROUNDS times
//! ```
//!
//! Each pass through the loop:
//!
//! 1. exhaustion check (no record on termination)
//! 2. scheduler picks the attacker
//! 3. attack, defense and counter resolution ([`crate::combat`])
//! 4. damage application with a knockout check after each hit
//! 5. the action and its trace are appended
//!
//! Given the same profiles, rules and seed the report is identical, byte for
//! byte once encoded.

mod errors;
mod report;
mod round;
mod state;
mod turns;

pub use errors::CombatError;
pub use report::{CombatLog, CombatReport, RoundBuffer, RoundTrace};
pub use state::{CombatState, FighterState};
pub use turns::{TurnScheduler, opening_side};

use arrayvec::ArrayVec;

use crate::combat::{ActionCosts, Side, WinCondition};
use crate::config::CombatRules;
use crate::env::{DuelEnv, PlayerLoadout, Seed, SeedStream};
use crate::stats::FighterProfile;

use round::{Corner, resolve_round};

/// Deterministic duel simulator.
#[derive(Clone, Copy, Debug)]
pub struct CombatEngine<'a> {
    rules: &'a CombatRules,
}

impl<'a> CombatEngine<'a> {
    pub fn new(rules: &'a CombatRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'a CombatRules {
        self.rules
    }

    /// Resolves two player loadouts through the collaborators and simulates.
    ///
    /// # Errors
    ///
    /// - `CombatError::Oracle` when a fighter or skin is unknown
    /// - `CombatError::InvalidProfile` when table rows are missing or
    ///   malformed
    pub fn resolve_duel(
        &self,
        env: &DuelEnv<'_>,
        one: &PlayerLoadout,
        two: &PlayerLoadout,
        seed: Seed,
    ) -> Result<CombatReport, CombatError> {
        let one = Self::build_profile(env, one, Side::One)?;
        let two = Self::build_profile(env, two, Side::Two)?;
        self.simulate(&one, &two, seed)
    }

    fn build_profile(
        env: &DuelEnv<'_>,
        player: &PlayerLoadout,
        side: Side,
    ) -> Result<FighterProfile, CombatError> {
        let (attributes, loadout) = env
            .resolve(player)
            .map_err(|error| CombatError::Oracle { side, error })?;
        FighterProfile::build(attributes, loadout, env.tables())
            .map_err(|error| CombatError::invalid_profile(side, error))
    }

    /// Runs a duel between two prebuilt profiles.
    ///
    /// # Errors
    ///
    /// Returns `CombatError::InvalidProfile` if either profile fails
    /// validation. No rounds are simulated in that case.
    pub fn simulate(
        &self,
        one: &FighterProfile,
        two: &FighterProfile,
        seed: Seed,
    ) -> Result<CombatReport, CombatError> {
        one.validate()
            .map_err(|error| CombatError::invalid_profile(Side::One, error))?;
        two.validate()
            .map_err(|error| CombatError::invalid_profile(Side::Two, error))?;

        let corners = [
            Corner {
                profile: one,
                costs: ActionCosts::for_fighter(one, self.rules),
            },
            Corner {
                profile: two,
                costs: ActionCosts::for_fighter(two, self.rules),
            },
        ];

        let stream = SeedStream::from(seed);
        let (opener, mut stream) = opening_side(one, two, stream);
        let mut scheduler = TurnScheduler::from_profiles(one, two, opener);
        let mut state = CombatState::new(one, two);
        let mut actions = ArrayVec::new();
        let mut trace = ArrayVec::new();

        let mut verdict = None;
        for _ in 0..CombatRules::MAX_ROUNDS {
            let (exhausted, next) = exhaustion_check(&corners, &state, stream);
            stream = next;
            if let Some(winner) = exhausted {
                verdict = Some((winner, WinCondition::Exhaustion));
                break;
            }

            let attacker = scheduler.next_attacker();
            let (outcome, next) = resolve_round(&corners, attacker, &mut state, stream);
            stream = next;

            state.round += 1;
            state.last_attacker = Some(attacker);
            actions
                .try_push(outcome.action)
                .map_err(|_| CombatError::LogOverflow {
                    capacity: CombatRules::MAX_ROUNDS,
                })?;
            trace
                .try_push(RoundTrace {
                    attacker,
                    health: state.health(),
                    stamina: state.stamina(),
                })
                .map_err(|_| CombatError::LogOverflow {
                    capacity: CombatRules::MAX_ROUNDS,
                })?;

            if let Some(winner) = outcome.knockout {
                verdict = Some((winner, WinCondition::Health));
                break;
            }
        }

        let (winner, condition) = match verdict {
            Some(verdict) => verdict,
            None => {
                let (winner, _) = round_cap_winner(&state, stream);
                (winner, WinCondition::MaxRounds)
            }
        };

        Ok(CombatReport {
            log: CombatLog {
                winner,
                condition,
                actions,
            },
            trace,
            opener,
            state,
        })
    }
}

/// Checks both sides against their cheapest action.
///
/// Returns the winner when at least one side is exhausted. Draws a coin flip
/// only when both are.
fn exhaustion_check(
    corners: &[Corner<'_>; 2],
    state: &CombatState,
    stream: SeedStream,
) -> (Option<Side>, SeedStream) {
    let exhausted =
        |side: Side| state.fighter(side).stamina < corners[side.index()].costs.minimum;

    match (exhausted(Side::One), exhausted(Side::Two)) {
        (false, false) => (None, stream),
        (true, false) => (Some(Side::Two), stream),
        (false, true) => (Some(Side::One), stream),
        (true, true) => {
            let (heads, stream) = stream.coin_flip();
            (Some(if heads { Side::One } else { Side::Two }), stream)
        }
    }
}

/// Higher remaining health wins; equal health is a coin flip.
fn round_cap_winner(state: &CombatState, stream: SeedStream) -> (Side, SeedStream) {
    let [one, two] = state.health();
    if one > two {
        (Side::One, stream)
    } else if two > one {
        (Side::Two, stream)
    } else {
        let (heads, stream) = stream.coin_flip();
        (if heads { Side::One } else { Side::Two }, stream)
    }
}
