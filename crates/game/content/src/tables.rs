//! Owned copy of the balance tables.

use std::collections::HashMap;

use duel_core::{
    ArmorKind, ArmorStats, DerivationTable, Stance, StanceModifiers, StandardTables,
    TablesOracle, WeaponKind, WeaponStats,
};

/// Balance tables held in memory, typically loaded from a file.
///
/// A kind without a row answers `None`, which aborts profile construction.
/// [`TableSnapshot::standard`] starts from the built-in rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSnapshot {
    pub weapons: HashMap<WeaponKind, WeaponStats>,
    pub armor: HashMap<ArmorKind, ArmorStats>,
    pub stances: HashMap<Stance, StanceModifiers>,
    pub derivation: DerivationTable,
}

impl TableSnapshot {
    /// Snapshot of [`StandardTables`] with every row present.
    pub fn standard() -> Self {
        use strum::IntoEnumIterator;

        Self {
            weapons: WeaponKind::iter()
                .map(|kind| (kind, StandardTables::weapon_stats(kind)))
                .collect(),
            armor: ArmorKind::iter()
                .map(|kind| (kind, StandardTables::armor_stats(kind)))
                .collect(),
            stances: Stance::iter()
                .map(|stance| (stance, StandardTables::stance_modifiers(stance)))
                .collect(),
            derivation: DerivationTable::STANDARD,
        }
    }
}

impl TablesOracle for TableSnapshot {
    fn weapon(&self, kind: WeaponKind) -> Option<WeaponStats> {
        self.weapons.get(&kind).copied()
    }

    fn armor(&self, kind: ArmorKind) -> Option<ArmorStats> {
        self.armor.get(&kind).copied()
    }

    fn stance(&self, stance: Stance) -> Option<StanceModifiers> {
        self.stances.get(&stance).copied()
    }

    fn derivation(&self) -> DerivationTable {
        self.derivation
    }
}
