//! Data-driven duel content and loaders.
//!
//! This crate houses the file-backed collaborators the resolver consumes:
//! - Fighter roster and skin loadouts (data-driven via RON)
//! - Weapon, armor, stance and derivation tables (data-driven via TOML)
//! - Combat rules (data-driven via TOML)
//!
//! Content is read once and served through the `duel-core` oracle traits; it
//! never appears in combat state.

pub mod roster;
pub mod tables;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::{Roster, RosterFighter, RosterSkin};
pub use tables::TableSnapshot;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, RosterLoader, TablesLoader};
