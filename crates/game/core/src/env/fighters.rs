use crate::equipment::Loadout;
use crate::stats::BaseAttributes;

/// Fighter reference as submitted by a duel contract.
///
/// The resolver never interprets the ids; they are handed to the
/// [`FighterOracle`] and [`SkinOracle`] to obtain attributes and equipment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerLoadout {
    pub fighter_id: u32,
    pub skin_index: u32,
    pub skin_token_id: u16,
}

impl PlayerLoadout {
    pub const fn new(fighter_id: u32, skin_index: u32, skin_token_id: u16) -> Self {
        Self {
            fighter_id,
            skin_index,
            skin_token_id,
        }
    }
}

/// Read-only view of the character registry.
pub trait FighterOracle: Send + Sync {
    /// Base attributes of a player, default character or monster.
    fn base_attributes(&self, fighter_id: u32) -> Option<BaseAttributes>;
}

/// Read-only view of the skin registry.
pub trait SkinOracle: Send + Sync {
    /// Weapon, armor and stance carried by a skin token.
    fn loadout(&self, skin_index: u32, token_id: u16) -> Option<Loadout>;
}
