//! Damage rolls and armor mitigation.
//!
//! Values stay widened (`u64`) through every step and are only narrowed to
//! wire width when an [`ActionOutcome`](super::ActionOutcome) is built.

use crate::env::SeedStream;
use crate::equipment::{ArmorStats, DamageType};
use crate::stats::FighterProfile;

/// A rolled blow before the target's armor is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strike {
    pub damage: u64,
    pub critical: bool,
    pub damage_type: DamageType,
}

/// Rolls a blow with `attacker`'s weapon.
///
/// # Formula
///
/// ```text
/// raw    = min_damage + uniform(0, max_damage - min_damage + 1)
/// scaled = raw × 100 × damage_modifier / 10000
/// if roll < crit_chance:
///     scaled = scaled × crit_multiplier / 100
/// ```
///
/// Consumes two draws: damage, then crit.
#[must_use]
pub fn roll_strike(attacker: &FighterProfile, stream: SeedStream) -> (Strike, SeedStream) {
    let weapon = &attacker.weapon;
    let (raw, stream) =
        stream.range_inclusive(u32::from(weapon.min_damage), u32::from(weapon.max_damage));
    let scaled = scale_damage(raw, attacker.stats.damage_modifier);

    let (roll, stream) = stream.roll_percent();
    let critical = roll < attacker.stats.crit_chance;
    let damage = if critical {
        apply_crit(scaled, attacker.stats.crit_multiplier)
    } else {
        scaled
    };

    let strike = Strike {
        damage,
        critical,
        damage_type: weapon.damage_type,
    };
    (strike, stream)
}

/// Applies a percentage damage modifier.
pub fn scale_damage(raw: u32, damage_modifier: u32) -> u64 {
    u64::from(raw) * 100 * u64::from(damage_modifier) / 10_000
}

/// Applies a percentage crit multiplier.
pub fn apply_crit(damage: u64, crit_multiplier: u32) -> u64 {
    damage.saturating_mul(u64::from(crit_multiplier)) / 100
}

/// Damage left after the target's armor.
///
/// ```text
/// mitigated = damage × (100 - resist[type]) / 100 - defense   (floor 0)
/// ```
pub fn mitigate(damage: u64, damage_type: DamageType, armor: &ArmorStats) -> u64 {
    let resist = u64::from(armor.resistance(damage_type).min(100));
    let resisted = damage.saturating_mul(100 - resist) / 100;
    resisted.saturating_sub(u64::from(armor.defense))
}

/// Subtracts damage from a pool, flooring at zero.
pub fn apply_damage(pool: u32, damage: u64) -> u32 {
    u64::from(pool).saturating_sub(damage) as u32
}
