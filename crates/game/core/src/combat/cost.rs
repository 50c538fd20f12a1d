//! Stamina costs, resolved once per fighter.

use crate::config::CombatRules;
use crate::stats::FighterProfile;

/// Stamina price of every action a fighter can take.
///
/// Attack and counter costs scale with the weapon's stamina modifier and the
/// stance; defensive costs scale with the stance only.
///
/// ```text
/// attack  = base_attack_cost × weapon% × stance% / 10000
/// miss    = attack / miss_cost_divisor
/// block   = block_cost × stance% / 100
/// counter = counter_cost × weapon% × stance% / 10000
/// minimum = minimum_action_cost × stance% / 100
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionCosts {
    pub attack: u32,
    pub miss: u32,
    pub block: u32,
    pub parry: u32,
    pub dodge: u32,
    pub counter: u32,
    /// Below this the fighter is exhausted and loses.
    pub minimum: u32,
}

impl ActionCosts {
    pub fn for_fighter(profile: &FighterProfile, rules: &CombatRules) -> Self {
        let weapon = u64::from(profile.weapon.stamina_modifier);
        let stance = u64::from(profile.stance.stamina_cost);

        let with_stance = |cost: u16| narrow(u64::from(cost) * stance / 100);
        let with_weapon = |cost: u16| narrow(u64::from(cost) * weapon * stance / 10_000);

        let attack = with_weapon(rules.base_attack_cost);
        Self {
            attack,
            miss: attack / u32::from(rules.miss_cost_divisor.max(1)),
            block: with_stance(rules.block_cost),
            parry: with_stance(rules.parry_cost),
            dodge: with_stance(rules.dodge_cost),
            counter: with_weapon(rules.counter_cost),
            minimum: with_stance(rules.minimum_action_cost),
        }
    }
}

fn narrow(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
