//! Table-driven formulas mapping base attributes to derived stats.
//!
//! Every derived stat is a clamped linear function of the six attributes:
//!
//! ```text
//! value = clamp(base + Σ(attribute × weight) / 100, min, max)
//! ```
//!
//! Weights are expressed in hundredths so fractional coefficients stay in
//! integer arithmetic. Evaluation widens to `i64` before multiplying.

use super::attributes::{Attribute, BaseAttributes};

/// Constant floor of the max-health formula.
pub const HEALTH_FLOOR: i32 = 75;
/// Max health gained per point of constitution.
pub const HEALTH_CONSTITUTION_WEIGHT: i32 = 12;
/// Max health gained per point of size.
pub const HEALTH_SIZE_WEIGHT: i32 = 6;

/// Constant floor of the max-endurance formula.
pub const ENDURANCE_FLOOR: i32 = 45;
/// Max endurance gained per point of stamina.
pub const ENDURANCE_STAMINA_WEIGHT: i32 = 8;
/// Max endurance gained per point of size.
pub const ENDURANCE_SIZE_WEIGHT: i32 = 2;

/// Clamped linear formula over the base attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFormula {
    pub base: i32,
    /// Per-attribute weights in hundredths, in [`Attribute::ALL`] order.
    pub weights: [i32; 6],
    pub min: i32,
    pub max: i32,
}

impl LinearFormula {
    pub const fn new(base: i32, weights: [i32; 6], min: i32, max: i32) -> Self {
        Self {
            base,
            weights,
            min,
            max,
        }
    }

    /// Formula with whole-number weights (`12` means `+12` per point).
    pub const fn per_point(base: i32, per_point: [i32; 6], min: i32, max: i32) -> Self {
        let mut weights = [0; 6];
        let mut i = 0;
        while i < 6 {
            weights[i] = per_point[i] * 100;
            i += 1;
        }
        Self::new(base, weights, min, max)
    }

    /// Weight (in hundredths) applied to one attribute.
    pub const fn weight(&self, attribute: Attribute) -> i32 {
        self.weights[attribute.index()]
    }

    /// Evaluates the formula and clamps the result into `[min, max]`.
    pub fn evaluate(&self, attributes: &BaseAttributes) -> u32 {
        let weighted: i64 = attributes
            .to_array()
            .iter()
            .zip(self.weights.iter())
            .map(|(&value, &weight)| i64::from(value) * i64::from(weight))
            .sum();
        let raw = i64::from(self.base) + weighted / 100;
        raw.clamp(i64::from(self.min), i64::from(self.max)).max(0) as u32
    }

    /// Clamps an already computed value into this formula's bounds.
    pub fn clamp(&self, value: u64) -> u32 {
        let min = self.min.max(0) as u64;
        let max = self.max.max(0) as u64;
        value.clamp(min, max.max(min)) as u32
    }
}

/// One formula per derived stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivationTable {
    pub max_health: LinearFormula,
    pub max_endurance: LinearFormula,
    pub initiative: LinearFormula,
    pub hit_chance: LinearFormula,
    pub dodge_chance: LinearFormula,
    pub block_chance: LinearFormula,
    pub parry_chance: LinearFormula,
    pub crit_chance: LinearFormula,
    pub crit_multiplier: LinearFormula,
    pub counter_chance: LinearFormula,
    pub damage_modifier: LinearFormula,
}

impl DerivationTable {
    /// Standard balance table.
    ///
    /// Weight columns: `[STR, CON, SIZE, AGI, STA, LUCK]`.
    pub const STANDARD: Self = Self {
        max_health: LinearFormula::per_point(
            HEALTH_FLOOR,
            [0, HEALTH_CONSTITUTION_WEIGHT, HEALTH_SIZE_WEIGHT, 0, 0, 0],
            1,
            u16::MAX as i32,
        ),
        max_endurance: LinearFormula::per_point(
            ENDURANCE_FLOOR,
            [0, 0, ENDURANCE_SIZE_WEIGHT, 0, ENDURANCE_STAMINA_WEIGHT, 0],
            1,
            u16::MAX as i32,
        ),
        initiative: LinearFormula::per_point(20, [0, 0, 0, 3, 0, 2], 0, 1_000),
        hit_chance: LinearFormula::new(50, [0, 0, 0, 100, 0, 100], 30, 100),
        dodge_chance: LinearFormula::new(5, [0, 0, -50, 100, 0, 50], 0, 50),
        block_chance: LinearFormula::new(5, [50, 100, 50, 0, 0, 0], 0, 60),
        parry_chance: LinearFormula::new(5, [50, 0, 0, 50, 0, 33], 0, 60),
        crit_chance: LinearFormula::new(2, [0, 0, 0, 33, 0, 100], 0, 50),
        crit_multiplier: LinearFormula::per_point(150, [2, 0, 0, 0, 0, 3], 150, 300),
        counter_chance: LinearFormula::new(5, [0, 0, 0, 50, 0, 100], 0, 50),
        damage_modifier: LinearFormula::per_point(50, [4, 0, 2, 0, 0, 0], 50, 200),
    };

    /// Every formula paired with the stat name it produces.
    pub fn formulas(&self) -> [(&'static str, &LinearFormula); 11] {
        [
            ("max_health", &self.max_health),
            ("max_endurance", &self.max_endurance),
            ("initiative", &self.initiative),
            ("hit_chance", &self.hit_chance),
            ("dodge_chance", &self.dodge_chance),
            ("block_chance", &self.block_chance),
            ("parry_chance", &self.parry_chance),
            ("crit_chance", &self.crit_chance),
            ("crit_multiplier", &self.crit_multiplier),
            ("counter_chance", &self.counter_chance),
            ("damage_modifier", &self.damage_modifier),
        ]
    }
}

impl Default for DerivationTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
