//! Combat resolution primitives.
//!
//! Pure functions for the pieces of a round. The engine strings them together;
//! nothing here touches combat state.
//!
//! # Architecture
//!
//! - **Stream-threaded**: every random function takes a [`SeedStream`] by
//!   value and returns its successor
//! - **Widened**: damage is `u64` until it is written into an
//!   [`ActionOutcome`]
//! - **Profile-based**: reads only immutable [`FighterProfile`] values
//!
//! # Core Functions
//!
//! - `check_hit`: percentage roll against [`effective_hit_chance`]
//! - `roll_strike`: damage roll, damage modifier, crit
//! - `resolve_defense`: Block / Parry / Dodge / Hit with counters
//! - `mitigate`: armor resistance then flat defense
//!
//! [`SeedStream`]: crate::env::SeedStream
//! [`FighterProfile`]: crate::stats::FighterProfile

pub mod cost;
pub mod damage;
pub mod defense;
pub mod hit;
pub mod result;

pub use cost::ActionCosts;
pub use damage::{Strike, apply_damage, mitigate, roll_strike};
pub use defense::{Defense, Reaction, resolve_defense};
pub use hit::{check_hit, effective_hit_chance};
pub use result::{ActionOutcome, CombatAction, CombatResultType, Side, WinCondition};
