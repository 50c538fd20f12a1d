/// Combat rules: stamina costs and other tunable parameters.
///
/// Costs are nominal values scaled at use time by the acting fighter's stance
/// (and weapon, for attacks and counters).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatRules {
    /// Stamina spent on a full attack.
    pub base_attack_cost: u16,
    pub block_cost: u16,
    pub parry_cost: u16,
    pub dodge_cost: u16,
    /// Extra stamina spent when a block or parry turns into a counter.
    pub counter_cost: u16,
    /// Cheapest action; a fighter below it at the start of a round is
    /// exhausted.
    pub minimum_action_cost: u16,
    /// A missed attack costs `attack cost / miss_cost_divisor`.
    pub miss_cost_divisor: u16,
}

impl CombatRules {
    // ===== compile-time constants used as type parameters =====
    /// Hard cap on rounds per fight. Also bounds the encoded log length.
    pub const MAX_ROUNDS: usize = 50;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BASE_ATTACK_COST: u16 = 8;
    pub const DEFAULT_BLOCK_COST: u16 = 4;
    pub const DEFAULT_PARRY_COST: u16 = 4;
    pub const DEFAULT_DODGE_COST: u16 = 3;
    pub const DEFAULT_COUNTER_COST: u16 = 6;
    pub const DEFAULT_MINIMUM_ACTION_COST: u16 = 3;
    pub const DEFAULT_MISS_COST_DIVISOR: u16 = 3;

    pub const fn new() -> Self {
        Self {
            base_attack_cost: Self::DEFAULT_BASE_ATTACK_COST,
            block_cost: Self::DEFAULT_BLOCK_COST,
            parry_cost: Self::DEFAULT_PARRY_COST,
            dodge_cost: Self::DEFAULT_DODGE_COST,
            counter_cost: Self::DEFAULT_COUNTER_COST,
            minimum_action_cost: Self::DEFAULT_MINIMUM_ACTION_COST,
            miss_cost_divisor: Self::DEFAULT_MISS_COST_DIVISOR,
        }
    }
}

impl Default for CombatRules {
    fn default() -> Self {
        Self::new()
    }
}
