//! Deterministic duel resolution for the fighting game.
//!
//! `duel-core` turns two fighters and a 256-bit seed into a winner, a win
//! condition and a compact action log. It performs no I/O: balance tables and
//! registries are injected through the oracle traits in [`env`], and the same
//! inputs always produce the same bytes.
//!
//! # Architecture
//!
//! ```text
//! env (oracles, seed) ──> stats (profiles) ──> engine (round loop) ──> codec
//!                                   ▲                  │
//!                                   └── equipment      └── combat (pure rolls)
//! ```
//!
//! All simulation state lives inside [`engine::CombatEngine::simulate`];
//! supporting crates depend on the types re-exported here.
pub mod codec;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod equipment;
pub mod error;
pub mod stats;

pub use codec::{CodecError, decode, encode, peek_outcome};
pub use combat::{ActionOutcome, CombatAction, CombatResultType, Side, WinCondition};
pub use config::CombatRules;
pub use engine::{CombatEngine, CombatError, CombatLog, CombatReport, CombatState, RoundTrace};
pub use env::{
    DuelEnv, FighterOracle, OracleError, PlayerLoadout, Seed, SeedStream, SkinOracle,
    StandardTables, TablesOracle,
};
pub use equipment::{
    ArmorKind, ArmorStats, DamageType, Loadout, Stance, StanceModifiers, WeaponKind, WeaponStats,
};
pub use error::{ErrorSeverity, GameError};
pub use stats::{
    Attribute, BaseAttributes, DerivationTable, DerivedStats, FighterProfile, LinearFormula,
    ProfileError,
};
