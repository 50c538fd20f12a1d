//! Armor kinds and armor table rows.

use super::DamageType;

/// Equippable armor classes, lightest first.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArmorKind {
    Cloth,
    #[default]
    Leather,
    Chain,
    Plate,
}

/// Armor table row.
///
/// Resistances are percentages (0-100) removed from incoming damage of the
/// matching type before the flat `defense` is subtracted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorStats {
    pub defense: u16,
    /// Slows the wearer's tempo.
    pub weight: u16,
    pub slashing_resist: u8,
    pub piercing_resist: u8,
    pub blunt_resist: u8,
}

impl ArmorStats {
    pub const fn new(
        defense: u16,
        weight: u16,
        slashing_resist: u8,
        piercing_resist: u8,
        blunt_resist: u8,
    ) -> Self {
        Self {
            defense,
            weight,
            slashing_resist,
            piercing_resist,
            blunt_resist,
        }
    }

    /// Resistance percentage against the given damage type.
    pub const fn resistance(&self, damage_type: DamageType) -> u8 {
        match damage_type {
            DamageType::Slashing => self.slashing_resist,
            DamageType::Piercing => self.piercing_resist,
            DamageType::Blunt => self.blunt_resist,
        }
    }

    /// Returns true when every resistance is a valid percentage.
    pub const fn is_well_formed(&self) -> bool {
        self.slashing_resist <= 100 && self.piercing_resist <= 100 && self.blunt_resist <= 100
    }
}
