//! Per-round combat records.
//!
//! These are the values the action log carries. Every enum here has a stable
//! byte code that is part of the wire format.

/// Outcome of one participant's part in a round.
///
/// The discriminants are wire codes and must never be reordered.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum CombatResultType {
    Miss = 0,
    Attack = 1,
    Crit = 2,
    Block = 3,
    Counter = 4,
    CounterCrit = 5,
    Dodge = 6,
    Parry = 7,
    Riposte = 8,
    RiposteCrit = 9,
    Exhausted = 10,
    Hit = 11,
}

impl CombatResultType {
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Maps a wire code back to its variant. Unknown codes yield `None`.
    pub const fn from_code(code: u8) -> Option<Self> {
        use CombatResultType::*;
        Some(match code {
            0 => Miss,
            1 => Attack,
            2 => Crit,
            3 => Block,
            4 => Counter,
            5 => CounterCrit,
            6 => Dodge,
            7 => Parry,
            8 => Riposte,
            9 => RiposteCrit,
            10 => Exhausted,
            11 => Hit,
            _ => return None,
        })
    }

    /// True for defender results that deal damage back to the attacker.
    pub const fn is_counter(self) -> bool {
        matches!(
            self,
            Self::Counter | Self::CounterCrit | Self::Riposte | Self::RiposteCrit
        )
    }

    /// True for defender results that stop the incoming attack entirely.
    pub const fn prevents_damage(self) -> bool {
        matches!(self, Self::Block | Self::Parry | Self::Dodge) || self.is_counter()
    }
}

/// One of the two duel participants.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::One, Side::Two];

    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Slot in two-element per-side arrays.
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// Winner byte of the log header.
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }
}

/// Why the fight ended.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum WinCondition {
    /// The loser's health reached zero.
    Health = 0,
    /// The loser could not afford the cheapest action.
    Exhaustion = 1,
    /// The round cap fired; higher remaining health wins.
    MaxRounds = 2,
}

impl WinCondition {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Health),
            1 => Some(Self::Exhaustion),
            2 => Some(Self::MaxRounds),
            _ => None,
        }
    }
}

/// What one participant did in a round.
///
/// `damage` is what actually landed on the opponent and `stamina` is what the
/// participant spent. Both are stored at wire width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub result: CombatResultType,
    pub damage: u16,
    pub stamina: u8,
}

impl ActionOutcome {
    pub const fn new(result: CombatResultType, damage: u16, stamina: u8) -> Self {
        Self {
            result,
            damage,
            stamina,
        }
    }

    /// Defender slot for rounds without a reaction.
    pub const fn idle() -> Self {
        Self::new(CombatResultType::Miss, 0, 0)
    }

    /// Builds an outcome from widened values, saturating at wire width.
    pub fn saturating(result: CombatResultType, damage: u64, stamina: u32) -> Self {
        Self::new(
            result,
            u16::try_from(damage).unwrap_or(u16::MAX),
            u8::try_from(stamina).unwrap_or(u8::MAX),
        )
    }
}

/// One round of the canonical combat log, attacker first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatAction {
    pub attacker: ActionOutcome,
    pub defender: ActionOutcome,
}

impl CombatAction {
    pub const fn new(attacker: ActionOutcome, defender: ActionOutcome) -> Self {
        Self { attacker, defender }
    }
}
