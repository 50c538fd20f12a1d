//! Base attributes - the only per-fighter input the resolver needs.
//!
//! Attributes are rolled and stored by the character registry. The resolver
//! never validates their range (player fighters sit in `[3, 21]`, monsters in
//! `[3, 50]`); every derived formula clamps its own output instead.

/// The six base attributes that define a fighter.
///
/// - **STR** (Strength): damage, parry, crit multiplier
/// - **CON** (Constitution): health, blocking
/// - **SIZE**: health, endurance, damage; hurts dodging
/// - **AGI** (Agility): initiative, hit, dodge, parry, counters
/// - **STA** (Stamina): endurance pool
/// - **LUCK**: hit, crit, counters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseAttributes {
    pub strength: u8,
    pub constitution: u8,
    pub size: u8,
    pub agility: u8,
    pub stamina: u8,
    pub luck: u8,
}

impl BaseAttributes {
    pub const fn new(
        strength: u8,
        constitution: u8,
        size: u8,
        agility: u8,
        stamina: u8,
        luck: u8,
    ) -> Self {
        Self {
            strength,
            constitution,
            size,
            agility,
            stamina,
            luck,
        }
    }

    /// All six attributes set to the same value.
    pub const fn uniform(value: u8) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    /// Value of a single attribute.
    pub const fn get(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Constitution => self.constitution,
            Attribute::Size => self.size,
            Attribute::Agility => self.agility,
            Attribute::Stamina => self.stamina,
            Attribute::Luck => self.luck,
        }
    }

    /// Attributes in [`Attribute::ALL`] order.
    pub const fn to_array(&self) -> [u8; 6] {
        [
            self.strength,
            self.constitution,
            self.size,
            self.agility,
            self.stamina,
            self.luck,
        ]
    }

    pub const fn from_array(values: [u8; 6]) -> Self {
        Self::new(values[0], values[1], values[2], values[3], values[4], values[5])
    }
}

impl Default for BaseAttributes {
    /// Default attributes: all 12 (middle of the player range)
    fn default() -> Self {
        Self::uniform(12)
    }
}

/// Attribute selector used by formula weights.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    Strength,
    Constitution,
    Size,
    Agility,
    Stamina,
    Luck,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Strength,
        Attribute::Constitution,
        Attribute::Size,
        Attribute::Agility,
        Attribute::Stamina,
        Attribute::Luck,
    ];

    /// Position of this attribute in [`BaseAttributes::to_array`].
    pub const fn index(self) -> usize {
        match self {
            Attribute::Strength => 0,
            Attribute::Constitution => 1,
            Attribute::Size => 2,
            Attribute::Agility => 3,
            Attribute::Stamina => 4,
            Attribute::Luck => 5,
        }
    }
}
