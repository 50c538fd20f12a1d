//! Derived Stats - combat values computed from base attributes.
//!
//! These are NOT stored - recomputed at the start of every simulation.
//! Two steps:
//!
//! ```text
//! BaseAttributes ──derive──> DerivedStats ──with_stance──> DerivedStats
//! ```

use super::attributes::BaseAttributes;
use super::formula::DerivationTable;
use crate::equipment::StanceModifiers;

/// Derived combat statistics.
///
/// Chances use a 0-100 scale. `crit_multiplier` and `damage_modifier` are
/// integer percentages (100 = ×1.0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    pub max_health: u32,
    pub max_endurance: u32,
    pub initiative: u32,
    pub hit_chance: u32,
    pub dodge_chance: u32,
    pub block_chance: u32,
    pub parry_chance: u32,
    pub crit_chance: u32,
    pub crit_multiplier: u32,
    pub counter_chance: u32,
    pub damage_modifier: u32,
}

impl DerivedStats {
    /// Evaluates every formula of `table` against `attributes`.
    pub fn derive(attributes: &BaseAttributes, table: &DerivationTable) -> Self {
        Self {
            max_health: table.max_health.evaluate(attributes),
            max_endurance: table.max_endurance.evaluate(attributes),
            initiative: table.initiative.evaluate(attributes),
            hit_chance: table.hit_chance.evaluate(attributes),
            dodge_chance: table.dodge_chance.evaluate(attributes),
            block_chance: table.block_chance.evaluate(attributes),
            parry_chance: table.parry_chance.evaluate(attributes),
            crit_chance: table.crit_chance.evaluate(attributes),
            crit_multiplier: table.crit_multiplier.evaluate(attributes),
            counter_chance: table.counter_chance.evaluate(attributes),
            damage_modifier: table.damage_modifier.evaluate(attributes),
        }
    }

    /// Applies stance percentages to every percentage-valued stat.
    ///
    /// Health, endurance and initiative are absolute values and pass through.
    /// Results are re-clamped into the formula bounds of `table`.
    #[must_use]
    pub fn with_stance(self, stance: &StanceModifiers, table: &DerivationTable) -> Self {
        Self {
            max_health: self.max_health,
            max_endurance: self.max_endurance,
            initiative: self.initiative,
            hit_chance: table
                .hit_chance
                .clamp(scale_percent(self.hit_chance, stance.hit)),
            dodge_chance: table
                .dodge_chance
                .clamp(scale_percent(self.dodge_chance, stance.dodge)),
            block_chance: table
                .block_chance
                .clamp(scale_percent(self.block_chance, stance.block)),
            parry_chance: table
                .parry_chance
                .clamp(scale_percent(self.parry_chance, stance.parry)),
            crit_chance: table
                .crit_chance
                .clamp(scale_percent(self.crit_chance, stance.crit)),
            crit_multiplier: table
                .crit_multiplier
                .clamp(scale_percent(self.crit_multiplier, stance.crit_multiplier)),
            counter_chance: table
                .counter_chance
                .clamp(scale_percent(self.counter_chance, stance.counter)),
            damage_modifier: table
                .damage_modifier
                .clamp(scale_percent(self.damage_modifier, stance.damage)),
        }
    }
}

/// `value × percent / 100`, multiplied before dividing in `u64`.
pub fn scale_percent(value: u32, percent: u16) -> u64 {
    u64::from(value) * u64::from(percent) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_fighter_stats() {
        let stats = DerivedStats::derive(&BaseAttributes::uniform(10), &DerivationTable::STANDARD);

        // 75 + 10×12 + 10×6
        assert_eq!(stats.max_health, 255);
        // 45 + 10×8 + 10×2
        assert_eq!(stats.max_endurance, 145);
        // 20 + 10×3 + 10×2
        assert_eq!(stats.initiative, 70);
        assert_eq!(stats.hit_chance, 70);
        // 5 + (-5 + 10 + 5)
        assert_eq!(stats.dodge_chance, 15);
        assert_eq!(stats.block_chance, 25);
        assert_eq!(stats.parry_chance, 18);
        // 2 + (3.3 + 10) truncated
        assert_eq!(stats.crit_chance, 15);
        assert_eq!(stats.crit_multiplier, 200);
        assert_eq!(stats.counter_chance, 20);
        assert_eq!(stats.damage_modifier, 110);
    }

    #[test]
    fn neutral_stance_changes_nothing() {
        let table = DerivationTable::STANDARD;
        let stats = DerivedStats::derive(&BaseAttributes::uniform(14), &table);
        assert_eq!(stats.with_stance(&StanceModifiers::NEUTRAL, &table), stats);
    }

    #[test]
    fn stance_scales_percentages_and_keeps_pools() {
        let table = DerivationTable::STANDARD;
        let stats = DerivedStats::derive(&BaseAttributes::uniform(10), &table);
        let stance = StanceModifiers {
            damage: 125,
            block: 75,
            ..StanceModifiers::NEUTRAL
        };

        let adjusted = stats.with_stance(&stance, &table);

        // 110 × 125 / 100 = 137 (137.5 truncated only once)
        assert_eq!(adjusted.damage_modifier, 137);
        // 25 × 75 / 100 = 18
        assert_eq!(adjusted.block_chance, 18);
        assert_eq!(adjusted.max_health, stats.max_health);
        assert_eq!(adjusted.max_endurance, stats.max_endurance);
        assert_eq!(adjusted.initiative, stats.initiative);
    }

    #[test]
    fn stance_results_stay_within_bounds() {
        let table = DerivationTable::STANDARD;
        let stats = DerivedStats::derive(&BaseAttributes::uniform(21), &table);
        let stance = StanceModifiers {
            hit: 400,
            crit_multiplier: 10,
            ..StanceModifiers::NEUTRAL
        };

        let adjusted = stats.with_stance(&stance, &table);

        assert_eq!(adjusted.hit_chance, 100);
        assert_eq!(adjusted.crit_multiplier, 150);
    }

    #[test]
    fn scale_percent_multiplies_before_dividing() {
        assert_eq!(scale_percent(3, 150), 4);
        assert_eq!(scale_percent(u32::MAX, u16::MAX), u64::from(u32::MAX) * 65_535 / 100);
    }
}
