//! Hit check.

use crate::env::SeedStream;
use crate::equipment::WeaponStats;
use crate::stats::FighterProfile;

/// Hit chances are clamped to this ceiling.
pub const MAX_HIT_CHANCE: u32 = 100;

/// Weapon tempo modifier in percent: `50 + attack_speed / 2`.
///
/// A speed-100 weapon is neutral.
pub fn tempo_modifier(weapon: &WeaponStats) -> u64 {
    50 + u64::from(weapon.attack_speed) / 2
}

/// Chance that an incoming attack lands, on a 0-100 scale.
///
/// Read from the defending side: the defender's hit stat scaled by the
/// defender's weapon tempo.
///
/// ```text
/// chance = clamp(hit_chance × (50 + attack_speed / 2) / 100, 0, 100)
/// ```
pub fn effective_hit_chance(defender: &FighterProfile) -> u32 {
    let scaled = u64::from(defender.stats.hit_chance) * tempo_modifier(&defender.weapon) / 100;
    scaled.min(u64::from(MAX_HIT_CHANCE)) as u32
}

/// Draws one percentage roll and compares it against `chance`.
#[must_use]
pub fn check_hit(chance: u32, stream: SeedStream) -> (bool, SeedStream) {
    let (roll, stream) = stream.roll_percent();
    (roll < chance, stream)
}
