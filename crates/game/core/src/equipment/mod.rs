//! Equipment kinds and their stat table rows.
//!
//! A fighter's loadout is three closed enums (weapon, armor, stance). The
//! numbers behind each kind live in table rows ([`WeaponStats`],
//! [`ArmorStats`], [`StanceModifiers`]) served by a
//! [`TablesOracle`](crate::env::TablesOracle), so balance changes never touch
//! the simulator.

mod armor;
mod stance;
mod weapon;

pub use armor::{ArmorKind, ArmorStats};
pub use stance::{Stance, StanceModifiers};
pub use weapon::{DamageType, WeaponKind, WeaponStats};

/// Weapon, armor and stance selected for one fight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    pub weapon: WeaponKind,
    pub armor: ArmorKind,
    pub stance: Stance,
}

impl Loadout {
    pub const fn new(weapon: WeaponKind, armor: ArmorKind, stance: Stance) -> Self {
        Self {
            weapon,
            armor,
            stance,
        }
    }
}
