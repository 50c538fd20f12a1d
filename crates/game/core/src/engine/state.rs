//! Mutable per-simulation state.

use crate::combat::{Side, apply_damage};
use crate::stats::FighterProfile;

/// Health and stamina pools of one fighter.
///
/// Both only ever go down. Every mutation saturates at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterState {
    pub health: u32,
    pub stamina: u32,
}

impl FighterState {
    /// Full pools for a freshly built profile.
    pub fn fresh(profile: &FighterProfile) -> Self {
        Self {
            health: profile.stats.max_health,
            stamina: profile.stats.max_endurance,
        }
    }

    pub fn take_damage(&mut self, damage: u64) {
        self.health = apply_damage(self.health, damage);
    }

    pub fn spend(&mut self, stamina: u32) {
        self.stamina = self.stamina.saturating_sub(stamina);
    }

    pub const fn is_down(&self) -> bool {
        self.health == 0
    }
}

/// State of one duel in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    fighters: [FighterState; 2],
    /// Rounds fully resolved so far.
    pub round: u32,
    pub last_attacker: Option<Side>,
}

impl CombatState {
    pub fn new(one: &FighterProfile, two: &FighterProfile) -> Self {
        Self {
            fighters: [FighterState::fresh(one), FighterState::fresh(two)],
            round: 0,
            last_attacker: None,
        }
    }

    pub const fn fighter(&self, side: Side) -> &FighterState {
        &self.fighters[side.index()]
    }

    pub fn fighter_mut(&mut self, side: Side) -> &mut FighterState {
        &mut self.fighters[side.index()]
    }

    /// Health of both sides, indexed by [`Side::index`].
    pub const fn health(&self) -> [u32; 2] {
        [self.fighters[0].health, self.fighters[1].health]
    }

    /// Stamina of both sides, indexed by [`Side::index`].
    pub const fn stamina(&self) -> [u32; 2] {
        [self.fighters[0].stamina, self.fighters[1].stamina]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StandardTables;
    use crate::equipment::Loadout;
    use crate::stats::BaseAttributes;

    #[test]
    fn pools_start_full_and_saturate() {
        let profile = FighterProfile::build(
            BaseAttributes::uniform(10),
            Loadout::default(),
            &StandardTables,
        )
        .unwrap();
        let mut state = CombatState::new(&profile, &profile);
        assert_eq!(state.health(), [255, 255]);
        assert_eq!(state.stamina(), [145, 145]);

        let two = state.fighter_mut(Side::Two);
        two.take_damage(1_000);
        two.spend(1_000);
        assert!(state.fighter(Side::Two).is_down());
        assert_eq!(state.stamina(), [145, 0]);
        assert!(!state.fighter(Side::One).is_down());
    }
}
