//! Combat stances and their percentage modifiers.

/// Combat posture chosen before the fight.
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
pub enum Stance {
    Defensive,
    #[default]
    Balanced,
    Offensive,
}

/// Stance table row.
///
/// Every field is an integer percentage applied to the matching derived stat
/// (100 = unchanged).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StanceModifiers {
    pub damage: u16,
    pub hit: u16,
    pub crit: u16,
    pub crit_multiplier: u16,
    pub block: u16,
    pub parry: u16,
    pub dodge: u16,
    pub counter: u16,
    pub stamina_cost: u16,
    pub speed: u16,
}

impl StanceModifiers {
    /// Modifiers that leave every stat unchanged.
    pub const NEUTRAL: Self = Self {
        damage: 100,
        hit: 100,
        crit: 100,
        crit_multiplier: 100,
        block: 100,
        parry: 100,
        dodge: 100,
        counter: 100,
        stamina_cost: 100,
        speed: 100,
    };
}

impl Default for StanceModifiers {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
