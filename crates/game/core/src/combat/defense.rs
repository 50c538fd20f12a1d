//! Defensive reactions to a landed attack.
//!
//! Checks run in a fixed priority order and each one draws from the stream,
//! whether or not an earlier check already failed:
//!
//! ```text
//! Block ──fail──> Parry ──fail──> Dodge ──fail──> Hit (armor mitigation)
//!   │               │               │
//!   └─ counter?     └─ riposte?     └─ no counter
//! ```
//!
//! A check succeeds only when its roll is under the chance AND the defender
//! can pay its stamina cost. A successful roll the defender cannot afford
//! falls through to the next check.

use crate::env::SeedStream;
use crate::stats::FighterProfile;

use super::cost::ActionCosts;
use super::damage::{self, Strike};
use super::result::CombatResultType;

/// Active defenses, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reaction {
    Block,
    Parry,
    Dodge,
}

impl Reaction {
    pub const PRIORITY: [Reaction; 3] = [Reaction::Block, Reaction::Parry, Reaction::Dodge];

    /// Success chance for `defender`, on a 0-100 scale.
    pub fn chance(self, defender: &FighterProfile) -> u32 {
        match self {
            Reaction::Block => defender.stats.block_chance,
            Reaction::Parry => {
                let scaled = u64::from(defender.stats.parry_chance)
                    * u64::from(defender.weapon.parry_modifier)
                    / 100;
                u32::try_from(scaled).unwrap_or(u32::MAX)
            }
            Reaction::Dodge => defender.stats.dodge_chance,
        }
    }

    pub const fn cost(self, costs: &ActionCosts) -> u32 {
        match self {
            Reaction::Block => costs.block,
            Reaction::Parry => costs.parry,
            Reaction::Dodge => costs.dodge,
        }
    }

    /// Result codes for a plain success, a counter and a critical counter.
    /// Dodge never counters.
    const fn results(self) -> (CombatResultType, Option<(CombatResultType, CombatResultType)>) {
        use CombatResultType::*;
        match self {
            Reaction::Block => (Block, Some((Counter, CounterCrit))),
            Reaction::Parry => (Parry, Some((Riposte, RiposteCrit))),
            Reaction::Dodge => (Dodge, None),
        }
    }
}

/// Resolved defender side of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Defense {
    pub result: CombatResultType,
    /// Damage of the incoming strike that reached the defender.
    pub landed: u64,
    /// Counter or riposte damage dealt back to the attacker, after armor.
    pub counter_damage: u64,
    /// Stamina the defender spends.
    pub stamina: u32,
}

/// Resolves the defender's reaction to `strike`.
///
/// `stamina` is the defender's current pool and `costs` the defender's action
/// prices. Counter damage is rolled with the defender's own weapon and stats
/// and mitigated by the attacker's armor.
#[must_use]
pub fn resolve_defense(
    attacker: &FighterProfile,
    defender: &FighterProfile,
    stamina: u32,
    costs: &ActionCosts,
    strike: &Strike,
    mut stream: SeedStream,
) -> (Defense, SeedStream) {
    for reaction in Reaction::PRIORITY {
        let (roll, next) = stream.roll_percent();
        stream = next;

        let cost = reaction.cost(costs);
        if roll >= reaction.chance(defender) || stamina < cost {
            continue;
        }

        let (plain, counters) = reaction.results();
        let Some((counter, counter_crit)) = counters else {
            return (prevented(plain, cost), stream);
        };

        let (roll, next) = stream.roll_percent();
        stream = next;
        let affordable = stamina - cost >= costs.counter;
        if roll >= defender.stats.counter_chance || !affordable {
            return (prevented(plain, cost), stream);
        }

        let (blow, next) = damage::roll_strike(defender, stream);
        stream = next;
        let defense = Defense {
            result: if blow.critical { counter_crit } else { counter },
            landed: 0,
            counter_damage: damage::mitigate(blow.damage, blow.damage_type, &attacker.armor),
            stamina: cost + costs.counter,
        };
        return (defense, stream);
    }

    let defense = Defense {
        result: CombatResultType::Hit,
        landed: damage::mitigate(strike.damage, strike.damage_type, &defender.armor),
        counter_damage: 0,
        stamina: 0,
    };
    (defense, stream)
}

fn prevented(result: CombatResultType, stamina: u32) -> Defense {
    Defense {
        result,
        landed: 0,
        counter_damage: 0,
        stamina,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CombatRules;
    use crate::env::{Seed, StandardTables};
    use crate::equipment::{ArmorKind, DamageType, Loadout, Stance, WeaponKind};
    use crate::stats::BaseAttributes;

    const STRIKE: Strike = Strike {
        damage: 40,
        critical: false,
        damage_type: DamageType::Slashing,
    };

    fn fighter(weapon: WeaponKind, armor: ArmorKind) -> FighterProfile {
        let loadout = Loadout::new(weapon, armor, Stance::Balanced);
        FighterProfile::build(BaseAttributes::uniform(10), loadout, &StandardTables).unwrap()
    }

    /// Defender that succeeds at every active defense and never counters.
    fn wall() -> FighterProfile {
        let mut profile = fighter(WeaponKind::RapierAndShield, ArmorKind::Leather);
        profile.stats.block_chance = 100;
        profile.stats.parry_chance = 100;
        profile.stats.dodge_chance = 100;
        profile.stats.counter_chance = 0;
        profile
    }

    fn costs(profile: &FighterProfile, rules: &CombatRules) -> ActionCosts {
        ActionCosts::for_fighter(profile, rules)
    }

    fn resolve_many(defender: &FighterProfile, rules: &CombatRules, stamina: u32) -> Vec<Defense> {
        let attacker = fighter(WeaponKind::Greatsword, ArmorKind::Chain);
        let costs = costs(defender, rules);
        (0..64)
            .map(|seed| {
                let stream = SeedStream::new(Seed::from_u64(seed));
                resolve_defense(&attacker, defender, stamina, &costs, &STRIKE, stream).0
            })
            .collect()
    }

    #[test]
    fn block_wins_when_every_defense_succeeds() {
        let outcomes = resolve_many(&wall(), &CombatRules::default(), 100);
        assert!(outcomes.iter().all(|d| d.result == CombatResultType::Block));
        assert!(outcomes.iter().all(|d| d.landed == 0 && d.stamina == 4));
    }

    #[test]
    fn unaffordable_block_falls_through_to_parry() {
        let rules = CombatRules {
            block_cost: 200,
            ..CombatRules::default()
        };
        let outcomes = resolve_many(&wall(), &rules, 100);
        assert!(outcomes.iter().all(|d| d.result == CombatResultType::Parry));
    }

    #[test]
    fn unaffordable_block_and_parry_fall_through_to_dodge() {
        let rules = CombatRules {
            block_cost: 200,
            parry_cost: 200,
            ..CombatRules::default()
        };
        let outcomes = resolve_many(&wall(), &rules, 100);
        assert!(outcomes.iter().all(|d| d.result == CombatResultType::Dodge));
        assert!(outcomes.iter().all(|d| d.stamina == 3));
    }

    #[test]
    fn empty_stamina_takes_the_hit() {
        let defender = wall();
        let outcomes = resolve_many(&defender, &CombatRules::default(), 0);
        // Greatsword slashing vs leather: 40 × 85 / 100 - 2
        assert!(outcomes.iter().all(|d| d.result == CombatResultType::Hit));
        assert!(outcomes.iter().all(|d| d.landed == 32 && d.stamina == 0));
    }

    #[test]
    fn every_check_draws_even_after_a_failure() {
        let attacker = fighter(WeaponKind::Greatsword, ArmorKind::Chain);
        let mut defender = wall();
        defender.stats.block_chance = 0;
        defender.stats.parry_chance = 0;
        defender.stats.dodge_chance = 0;
        let costs = costs(&defender, &CombatRules::default());

        let stream = SeedStream::new(Seed::from_u64(3));
        let (defense, next) = resolve_defense(&attacker, &defender, 100, &costs, &STRIKE, stream);

        assert_eq!(defense.result, CombatResultType::Hit);
        assert_eq!(next.draws(), 3);
    }

    #[test]
    fn certain_counter_strikes_back_through_attacker_armor() {
        let attacker = fighter(WeaponKind::Greatsword, ArmorKind::Plate);
        let mut defender = wall();
        defender.stats.counter_chance = 100;
        defender.stats.crit_chance = 0;
        defender.stats.damage_modifier = 100;
        let costs = costs(&defender, &CombatRules::default());

        for seed in 0..32 {
            let stream = SeedStream::new(Seed::from_u64(seed));
            let (defense, _) = resolve_defense(&attacker, &defender, 100, &costs, &STRIKE, stream);

            assert_eq!(defense.result, CombatResultType::Counter);
            assert_eq!(defense.landed, 0);
            // Rapier piercing 22..=32 vs plate: × 70 / 100 - 6
            assert!((9..=16).contains(&defense.counter_damage));
            assert_eq!(defense.stamina, costs.block + costs.counter);
        }
    }

    #[test]
    fn counter_needs_stamina_beyond_the_block() {
        let attacker = fighter(WeaponKind::Greatsword, ArmorKind::Chain);
        let mut defender = wall();
        defender.stats.counter_chance = 100;
        let costs = costs(&defender, &CombatRules::default());

        // Block costs 4, counter 5 more (6 × 90 / 100); 8 is not enough.
        let stream = SeedStream::new(Seed::from_u64(11));
        let (defense, _) = resolve_defense(&attacker, &defender, 8, &costs, &STRIKE, stream);

        assert_eq!(defense.result, CombatResultType::Block);
        assert_eq!(defense.counter_damage, 0);
        assert_eq!(defense.stamina, 4);
    }

    #[test]
    fn parry_counters_are_ripostes() {
        let attacker = fighter(WeaponKind::Greatsword, ArmorKind::Chain);
        let mut defender = wall();
        defender.stats.block_chance = 0;
        defender.stats.counter_chance = 100;
        defender.stats.crit_chance = 100;
        let costs = costs(&defender, &CombatRules::default());

        let stream = SeedStream::new(Seed::from_u64(5));
        let (defense, _) = resolve_defense(&attacker, &defender, 100, &costs, &STRIKE, stream);

        assert_eq!(defense.result, CombatResultType::RiposteCrit);
        assert!(defense.counter_damage > 0);
    }

    #[test]
    fn weapon_scales_parry_chance() {
        let mut rapier = fighter(WeaponKind::RapierAndShield, ArmorKind::Leather);
        rapier.stats.parry_chance = 50;
        assert_eq!(Reaction::Parry.chance(&rapier), 65);

        let mut axe = fighter(WeaponKind::Battleaxe, ArmorKind::Leather);
        axe.stats.parry_chance = 50;
        assert_eq!(Reaction::Parry.chance(&axe), 30);
    }
}
