//! Fighter profile - everything the simulator reads about one fighter.

use crate::env::{OracleError, TablesOracle};
use crate::equipment::{ArmorStats, Loadout, StanceModifiers, WeaponStats};
use crate::error::{ErrorSeverity, GameError};

use super::attributes::BaseAttributes;
use super::derived::DerivedStats;

/// Share of effective initiative taken from equipment tempo (percent).
pub const TEMPO_INITIATIVE_WEIGHT: u64 = 90;
/// Share of effective initiative taken from the attribute formula (percent).
pub const STAT_INITIATIVE_WEIGHT: u64 = 10;
/// Armor weight is added to this before dividing weapon speed by it.
pub const ARMOR_WEIGHT_BASE: u64 = 100;

/// Immutable combat profile, built once per simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterProfile {
    pub attributes: BaseAttributes,
    pub loadout: Loadout,
    pub weapon: WeaponStats,
    pub armor: ArmorStats,
    pub stance: StanceModifiers,
    /// Derived stats with the stance already applied.
    pub stats: DerivedStats,
}

impl FighterProfile {
    /// Resolves table rows for `loadout` and derives the stance-adjusted stats.
    ///
    /// # Errors
    ///
    /// Fails when a table has no row for the loadout or the resulting profile
    /// is malformed (see [`FighterProfile::validate`]).
    pub fn build(
        attributes: BaseAttributes,
        loadout: Loadout,
        tables: &(impl TablesOracle + ?Sized),
    ) -> Result<Self, ProfileError> {
        let weapon = tables
            .weapon(loadout.weapon)
            .ok_or(OracleError::WeaponNotFound(loadout.weapon))?;
        let armor = tables
            .armor(loadout.armor)
            .ok_or(OracleError::ArmorNotFound(loadout.armor))?;
        let stance = tables
            .stance(loadout.stance)
            .ok_or(OracleError::StanceNotFound(loadout.stance))?;

        let derivation = tables.derivation();
        let stats =
            DerivedStats::derive(&attributes, &derivation).with_stance(&stance, &derivation);

        let profile = Self {
            attributes,
            loadout,
            weapon,
            armor,
            stance,
            stats,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Checks the invariants the simulator relies on.
    ///
    /// # Errors
    ///
    /// - `InvertedDamageRange` if the weapon's min damage exceeds its max
    /// - `ResistanceOutOfRange` if an armor resistance is above 100%
    /// - `ZeroHealth` if the fighter would start the fight already beaten
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.weapon.attack_speed == 0 {
            return Err(ProfileError::ZeroAttackSpeed);
        }
        if self.weapon.damage_spread().is_none() {
            return Err(ProfileError::InvertedDamageRange {
                min: self.weapon.min_damage,
                max: self.weapon.max_damage,
            });
        }
        if !self.armor.is_well_formed() {
            return Err(ProfileError::ResistanceOutOfRange);
        }
        if self.stats.max_health == 0 {
            return Err(ProfileError::ZeroHealth);
        }
        Ok(())
    }

    /// Weapon tempo after stance and armor weight.
    ///
    /// ```text
    /// tempo = attack_speed × stance.speed / (100 + armor.weight)
    /// ```
    pub fn tempo(&self) -> u32 {
        let speed = u64::from(self.weapon.attack_speed) * u64::from(self.stance.speed);
        let burden = ARMOR_WEIGHT_BASE + u64::from(self.armor.weight);
        (speed / burden) as u32
    }

    /// Initiative used to pick the opening attacker.
    ///
    /// 90% equipment tempo, 10% attribute initiative.
    pub fn effective_initiative(&self) -> u32 {
        let weighted = u64::from(self.tempo()) * TEMPO_INITIATIVE_WEIGHT
            + u64::from(self.stats.initiative) * STAT_INITIATIVE_WEIGHT;
        (weighted / 100) as u32
    }
}

/// Errors raised while building or validating a [`FighterProfile`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfileError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("weapon damage range is inverted ({min} > {max})")]
    InvertedDamageRange { min: u16, max: u16 },

    #[error("weapon attack speed is zero")]
    ZeroAttackSpeed,

    #[error("armor resistance above 100%")]
    ResistanceOutOfRange,

    #[error("fighter has zero max health")]
    ZeroHealth,
}

impl GameError for ProfileError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ProfileError::Oracle(err) => err.severity(),
            ProfileError::ZeroAttackSpeed
            | ProfileError::InvertedDamageRange { .. }
            | ProfileError::ResistanceOutOfRange
            | ProfileError::ZeroHealth => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ProfileError::Oracle(err) => err.error_code(),
            ProfileError::ZeroAttackSpeed => "PROFILE_ZERO_ATTACK_SPEED",
            ProfileError::InvertedDamageRange { .. } => "PROFILE_INVERTED_DAMAGE_RANGE",
            ProfileError::ResistanceOutOfRange => "PROFILE_RESISTANCE_OUT_OF_RANGE",
            ProfileError::ZeroHealth => "PROFILE_ZERO_HEALTH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StandardTables;
    use crate::equipment::{ArmorKind, Stance, WeaponKind};
    use crate::stats::DerivationTable;

    struct MissingPlate;

    impl TablesOracle for MissingPlate {
        fn weapon(&self, kind: WeaponKind) -> Option<WeaponStats> {
            StandardTables.weapon(kind)
        }
        fn armor(&self, kind: ArmorKind) -> Option<ArmorStats> {
            (kind != ArmorKind::Plate).then(|| StandardTables::armor_stats(kind))
        }
        fn stance(&self, stance: Stance) -> Option<StanceModifiers> {
            StandardTables.stance(stance)
        }
        fn derivation(&self) -> DerivationTable {
            DerivationTable::STANDARD
        }
    }

    #[test]
    fn builds_with_stance_applied() {
        let loadout = Loadout::new(WeaponKind::Greatsword, ArmorKind::Chain, Stance::Offensive);
        let profile =
            FighterProfile::build(BaseAttributes::uniform(10), loadout, &StandardTables).unwrap();

        // 110 × 125 / 100
        assert_eq!(profile.stats.damage_modifier, 137);
        assert_eq!(profile.weapon, StandardTables::weapon_stats(WeaponKind::Greatsword));
        assert_eq!(profile.stats.max_health, 255);
    }

    #[test]
    fn tempo_and_initiative() {
        let loadout = Loadout::new(
            WeaponKind::Quarterstaff,
            ArmorKind::Cloth,
            Stance::Defensive,
        );
        let profile =
            FighterProfile::build(BaseAttributes::uniform(10), loadout, &StandardTables).unwrap();

        // 130 × 105 / 110 = 124
        assert_eq!(profile.tempo(), 124);
        // (124 × 90 + 70 × 10) / 100 = 118
        assert_eq!(profile.effective_initiative(), 118);
    }

    #[test]
    fn missing_table_row_fails_loudly() {
        let loadout = Loadout::new(WeaponKind::Spear, ArmorKind::Plate, Stance::Balanced);
        let err =
            FighterProfile::build(BaseAttributes::uniform(10), loadout, &MissingPlate).unwrap_err();

        assert_eq!(err, ProfileError::Oracle(OracleError::ArmorNotFound(ArmorKind::Plate)));
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.error_code(), "ORACLE_ARMOR_NOT_FOUND");
    }

    #[test]
    fn validate_rejects_malformed_rows() {
        let mut profile =
            FighterProfile::build(BaseAttributes::uniform(10), Loadout::default(), &StandardTables)
                .unwrap();

        profile.weapon.min_damage = 50;
        profile.weapon.max_damage = 10;
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::InvertedDamageRange { min: 50, max: 10 })
        ));

        profile.weapon.max_damage = 60;
        profile.armor.blunt_resist = 101;
        assert_eq!(profile.validate(), Err(ProfileError::ResistanceOutOfRange));
    }

    #[test]
    fn validate_rejects_a_weapon_that_never_swings() {
        let mut profile =
            FighterProfile::build(BaseAttributes::uniform(10), Loadout::default(), &StandardTables)
                .unwrap();
        profile.weapon.attack_speed = 0;
        assert_eq!(profile.validate(), Err(ProfileError::ZeroAttackSpeed));
        assert_eq!(
            ProfileError::ZeroAttackSpeed.error_code(),
            "PROFILE_ZERO_ATTACK_SPEED"
        );
    }
}
