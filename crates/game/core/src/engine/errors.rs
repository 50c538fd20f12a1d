//! Error types for the combat simulator.

use crate::combat::Side;
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::stats::ProfileError;

/// Errors that abort a simulation.
///
/// A simulation either returns a complete report or one of these; there is
/// no partial result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// A collaborator could not resolve one side's loadout.
    #[error("fighter {side} could not be resolved: {error}")]
    Oracle {
        side: Side,
        #[source]
        error: OracleError,
    },

    /// One side's profile failed to build or validate.
    #[error("fighter {side} has an invalid profile: {error}")]
    InvalidProfile {
        side: Side,
        #[source]
        error: ProfileError,
    },

    /// More rounds were recorded than the log can hold.
    #[error("combat log exceeded {capacity} rounds")]
    LogOverflow { capacity: usize },
}

impl CombatError {
    pub fn invalid_profile(side: Side, error: ProfileError) -> Self {
        Self::InvalidProfile { side, error }
    }

    /// Side the error is attributed to, if any.
    pub fn side(&self) -> Option<Side> {
        match self {
            Self::Oracle { side, .. } | Self::InvalidProfile { side, .. } => Some(*side),
            Self::LogOverflow { .. } => None,
        }
    }
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle { error, .. } => error.severity(),
            Self::InvalidProfile { error, .. } => error.severity(),
            Self::LogOverflow { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle { error, .. } => error.error_code(),
            Self::InvalidProfile { error, .. } => error.error_code(),
            Self::LogOverflow { .. } => "COMBAT_LOG_OVERFLOW",
        }
    }
}
