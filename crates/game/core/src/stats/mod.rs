//! Stat system - from base attributes to a combat-ready profile.
//!
//! # Architecture
//!
//! ```text
//! [ BaseAttributes ]            six rolled values, owned by the registry
//!      ↓  DerivationTable       clamped linear formulas
//! [ DerivedStats ]
//!      ↓  StanceModifiers       percentage scaling, re-clamped
//! [ FighterProfile ]            + weapon / armor rows, immutable per fight
//! ```
//!
//! ## Principles
//!
//! 1. **Table-driven**: every coefficient lives in a [`DerivationTable`]
//! 2. **Integer-only**: widened arithmetic, multiply before divide
//! 3. **Deterministic**: pure functions, no I/O or randomness

pub mod attributes;
pub mod derived;
pub mod formula;
pub mod profile;

pub use attributes::{Attribute, BaseAttributes};
pub use derived::{DerivedStats, scale_percent};
pub use formula::{DerivationTable, LinearFormula};
pub use profile::{FighterProfile, ProfileError};
