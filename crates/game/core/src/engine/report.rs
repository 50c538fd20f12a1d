//! Simulation output.

use arrayvec::ArrayVec;

use crate::combat::{CombatAction, Side, WinCondition};
use crate::config::CombatRules;

use super::state::CombatState;

/// Fixed-capacity round buffer; the round cap is the capacity.
pub type RoundBuffer<T> = ArrayVec<T, { CombatRules::MAX_ROUNDS }>;

/// Canonical combat log, the value the codec puts on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatLog {
    pub winner: Side,
    pub condition: WinCondition,
    pub actions: RoundBuffer<CombatAction>,
}

impl CombatLog {
    pub fn new(winner: Side, condition: WinCondition) -> Self {
        Self {
            winner,
            condition,
            actions: ArrayVec::new(),
        }
    }

    pub fn rounds(&self) -> usize {
        self.actions.len()
    }
}

/// Who attacked in a round and where both pools stood afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundTrace {
    pub attacker: Side,
    /// Health after the round, indexed by [`Side::index`].
    pub health: [u32; 2],
    /// Stamina after the round, indexed by [`Side::index`].
    pub stamina: [u32; 2],
}

/// Everything a simulation produces.
///
/// The log is the stable output; the trace and final state are in-memory
/// context for tooling and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatReport {
    pub log: CombatLog,
    pub trace: RoundBuffer<RoundTrace>,
    pub opener: Side,
    pub state: CombatState,
}

impl CombatReport {
    pub fn winner(&self) -> Side {
        self.log.winner
    }

    pub fn condition(&self) -> WinCondition {
        self.log.condition
    }

    /// Rounds in which `side` was the attacker.
    pub fn attacks_by(&self, side: Side) -> usize {
        self.trace.iter().filter(|round| round.attacker == side).count()
    }

    /// Rounds paired with their attacking side.
    pub fn rounds(&self) -> impl Iterator<Item = (&CombatAction, &RoundTrace)> {
        self.log.actions.iter().zip(self.trace.iter())
    }
}
