//! In-memory fighter and skin registry.

use std::collections::BTreeMap;

use duel_core::{BaseAttributes, FighterOracle, Loadout, SkinOracle};

/// One registered fighter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterFighter {
    pub id: u32,
    pub name: String,
    pub attributes: BaseAttributes,
}

/// One skin token and the equipment it grants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterSkin {
    pub index: u32,
    pub token: u16,
    pub loadout: Loadout,
}

/// Fighter and skin registry serving both collaborator lookups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    fighters: BTreeMap<u32, RosterFighter>,
    skins: BTreeMap<(u32, u16), Loadout>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fighter, returning the entry it replaced.
    pub fn insert_fighter(&mut self, fighter: RosterFighter) -> Option<RosterFighter> {
        self.fighters.insert(fighter.id, fighter)
    }

    /// Registers a skin, returning the loadout it replaced.
    pub fn insert_skin(&mut self, skin: RosterSkin) -> Option<Loadout> {
        self.skins.insert((skin.index, skin.token), skin.loadout)
    }

    pub fn fighter(&self, id: u32) -> Option<&RosterFighter> {
        self.fighters.get(&id)
    }

    /// Fighters in id order.
    pub fn fighters(&self) -> impl Iterator<Item = &RosterFighter> {
        self.fighters.values()
    }

    /// Skins in `(index, token)` order.
    pub fn skins(&self) -> impl Iterator<Item = RosterSkin> + '_ {
        self.skins
            .iter()
            .map(|(&(index, token), &loadout)| RosterSkin {
                index,
                token,
                loadout,
            })
    }

    pub fn fighter_count(&self) -> usize {
        self.fighters.len()
    }

    pub fn skin_count(&self) -> usize {
        self.skins.len()
    }
}

impl FighterOracle for Roster {
    fn base_attributes(&self, fighter_id: u32) -> Option<BaseAttributes> {
        self.fighters.get(&fighter_id).map(|f| f.attributes)
    }
}

impl SkinOracle for Roster {
    fn loadout(&self, skin_index: u32, token_id: u16) -> Option<Loadout> {
        self.skins.get(&(skin_index, token_id)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{ArmorKind, Stance, WeaponKind};

    #[test]
    fn serves_both_oracles() {
        let mut roster = Roster::new();
        roster.insert_fighter(RosterFighter {
            id: 3,
            name: "Oda".into(),
            attributes: BaseAttributes::uniform(11),
        });
        let loadout = Loadout::new(WeaponKind::Spear, ArmorKind::Chain, Stance::Balanced);
        roster.insert_skin(RosterSkin {
            index: 1,
            token: 4,
            loadout,
        });

        assert_eq!(roster.base_attributes(3), Some(BaseAttributes::uniform(11)));
        assert_eq!(roster.base_attributes(4), None);
        assert_eq!(roster.loadout(1, 4), Some(loadout));
        assert_eq!(roster.loadout(4, 1), None);
        assert_eq!(roster.skins().count(), 1);
    }

    #[test]
    fn insert_reports_replacements() {
        let mut roster = Roster::new();
        let fighter = RosterFighter {
            id: 1,
            name: "A".into(),
            attributes: BaseAttributes::default(),
        };
        assert!(roster.insert_fighter(fighter.clone()).is_none());
        assert_eq!(roster.insert_fighter(fighter.clone()), Some(fighter));
        assert_eq!(roster.fighter_count(), 1);
    }
}
