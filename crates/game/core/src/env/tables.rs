use crate::equipment::{
    ArmorKind, ArmorStats, DamageType, Stance, StanceModifiers, WeaponKind, WeaponStats,
};
use crate::stats::DerivationTable;

/// Oracle providing weapon, armor and stance tables plus derivation formulas.
///
/// Lookups return `None` when a table has no row for the requested kind;
/// profile construction turns that into a fatal error rather than guessing.
pub trait TablesOracle: Send + Sync {
    fn weapon(&self, kind: WeaponKind) -> Option<WeaponStats>;
    fn armor(&self, kind: ArmorKind) -> Option<ArmorStats>;
    fn stance(&self, stance: Stance) -> Option<StanceModifiers>;
    fn derivation(&self) -> DerivationTable;
}

/// Built-in balance tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardTables;

impl StandardTables {
    pub const fn weapon_stats(kind: WeaponKind) -> WeaponStats {
        use DamageType::*;
        match kind {
            WeaponKind::SwordAndShield => WeaponStats::new(100, 26, 38, Slashing, 100, 100),
            WeaponKind::MaceAndShield => WeaponStats::new(85, 32, 44, Blunt, 80, 110),
            WeaponKind::RapierAndShield => WeaponStats::new(115, 22, 32, Piercing, 130, 90),
            WeaponKind::Greatsword => WeaponStats::new(80, 44, 60, Slashing, 110, 125),
            WeaponKind::Battleaxe => WeaponStats::new(70, 50, 70, Slashing, 60, 135),
            WeaponKind::Quarterstaff => WeaponStats::new(130, 18, 28, Blunt, 120, 80),
            WeaponKind::Spear => WeaponStats::new(105, 30, 42, Piercing, 90, 100),
        }
    }

    pub const fn armor_stats(kind: ArmorKind) -> ArmorStats {
        match kind {
            ArmorKind::Cloth => ArmorStats::new(0, 10, 0, 0, 0),
            ArmorKind::Leather => ArmorStats::new(2, 30, 15, 10, 5),
            ArmorKind::Chain => ArmorStats::new(4, 60, 30, 15, 10),
            ArmorKind::Plate => ArmorStats::new(6, 100, 40, 30, 15),
        }
    }

    pub const fn stance_modifiers(stance: Stance) -> StanceModifiers {
        match stance {
            Stance::Defensive => StanceModifiers {
                damage: 80,
                hit: 95,
                crit: 90,
                crit_multiplier: 100,
                block: 125,
                parry: 125,
                dodge: 120,
                counter: 115,
                stamina_cost: 85,
                speed: 105,
            },
            Stance::Balanced => StanceModifiers::NEUTRAL,
            Stance::Offensive => StanceModifiers {
                damage: 125,
                hit: 105,
                crit: 115,
                crit_multiplier: 110,
                block: 75,
                parry: 75,
                dodge: 80,
                counter: 90,
                stamina_cost: 115,
                speed: 95,
            },
        }
    }
}

impl TablesOracle for StandardTables {
    fn weapon(&self, kind: WeaponKind) -> Option<WeaponStats> {
        Some(Self::weapon_stats(kind))
    }

    fn armor(&self, kind: ArmorKind) -> Option<ArmorStats> {
        Some(Self::armor_stats(kind))
    }

    fn stance(&self, stance: Stance) -> Option<StanceModifiers> {
        Some(Self::stance_modifiers(stance))
    }

    fn derivation(&self) -> DerivationTable {
        DerivationTable::STANDARD
    }
}
