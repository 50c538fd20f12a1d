//! Oracle access errors.
//!
//! Errors related to collaborator lookups and table availability.

use crate::equipment::{ArmorKind, Stance, WeaponKind};
use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when resolving data through an oracle.
///
/// A duel cannot proceed without both fighters and complete tables, so every
/// variant aborts the simulation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// The fighter registry has no record for this id.
    #[error("fighter {0} not found")]
    FighterNotFound(u32),

    /// The skin registry cannot resolve this skin/token pair.
    #[error("skin {skin_index} token {token_id} not found")]
    SkinNotFound { skin_index: u32, token_id: u16 },

    /// Weapon table has no row for this kind.
    #[error("weapon table has no row for {0}")]
    WeaponNotFound(WeaponKind),

    /// Armor table has no row for this kind.
    #[error("armor table has no row for {0}")]
    ArmorNotFound(ArmorKind),

    /// Stance table has no row for this stance.
    #[error("stance table has no row for {0}")]
    StanceNotFound(Stance),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Unknown ids are bad input from the caller
            FighterNotFound(_) | SkinNotFound { .. } => ErrorSeverity::Validation,

            // Holes in the tables mean the content itself is broken
            WeaponNotFound(_) | ArmorNotFound(_) | StanceNotFound(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            FighterNotFound(_) => "ORACLE_FIGHTER_NOT_FOUND",
            SkinNotFound { .. } => "ORACLE_SKIN_NOT_FOUND",
            WeaponNotFound(_) => "ORACLE_WEAPON_NOT_FOUND",
            ArmorNotFound(_) => "ORACLE_ARMOR_NOT_FOUND",
            StanceNotFound(_) => "ORACLE_STANCE_NOT_FOUND",
        }
    }
}
