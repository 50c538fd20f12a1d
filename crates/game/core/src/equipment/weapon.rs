//! Weapon kinds and weapon table rows.

/// Equippable weapon families.
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
pub enum WeaponKind {
    /// One-handed sword with a shield
    #[default]
    SwordAndShield,
    /// Heavy mace with a shield
    MaceAndShield,
    /// Light thrusting blade with a buckler
    RapierAndShield,
    /// Two-handed sword
    Greatsword,
    /// Two-handed axe, slowest and hardest hitting
    Battleaxe,
    /// Staff, fastest weapon with the lightest blows
    Quarterstaff,
    /// Polearm with reach
    Spear,
}

/// Damage channel used to pick the armor resistance that applies.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageType {
    Slashing,
    Piercing,
    Blunt,
}

/// Weapon table row.
///
/// All modifiers are integer percentages with 100 as the neutral value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponStats {
    /// Swing tempo; feeds initiative and the turn scheduler.
    pub attack_speed: u16,
    pub min_damage: u16,
    pub max_damage: u16,
    pub damage_type: DamageType,
    /// Scales the wielder's parry chance.
    pub parry_modifier: u16,
    /// Scales attack and counter stamina costs.
    pub stamina_modifier: u16,
}

impl WeaponStats {
    pub const fn new(
        attack_speed: u16,
        min_damage: u16,
        max_damage: u16,
        damage_type: DamageType,
        parry_modifier: u16,
        stamina_modifier: u16,
    ) -> Self {
        Self {
            attack_speed,
            min_damage,
            max_damage,
            damage_type,
            parry_modifier,
            stamina_modifier,
        }
    }

    /// Width of the damage roll (`max - min + 1`), or `None` when the row is
    /// inverted.
    pub const fn damage_spread(&self) -> Option<u32> {
        if self.min_damage > self.max_damage {
            None
        } else {
            Some((self.max_damage - self.min_damage) as u32 + 1)
        }
    }
}
