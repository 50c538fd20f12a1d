//! Action log decoding errors.

use crate::error::{ErrorSeverity, GameError};

/// Reasons an encoded combat log is rejected.
///
/// Decoding never truncates, pads or guesses; any of these means the buffer is
/// not a log this version can read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodecError {
    #[error("log is {len} bytes, shorter than the {header}-byte header")]
    TooShort { len: usize, header: usize },

    #[error("log body is {body} bytes, not a multiple of {record}")]
    Misaligned { body: usize, record: usize },

    #[error("log holds {rounds} rounds, more than the {max} allowed")]
    TooManyRounds { rounds: usize, max: usize },

    #[error("unknown winner byte {0}")]
    UnknownWinner(u8),

    #[error("unknown win condition byte {0}")]
    UnknownCondition(u8),

    #[error("unknown result code {code} in round {round}")]
    UnknownResult { round: usize, code: u8 },
}

impl GameError for CodecError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooShort { .. } => "CODEC_TOO_SHORT",
            Self::Misaligned { .. } => "CODEC_MISALIGNED",
            Self::TooManyRounds { .. } => "CODEC_TOO_MANY_ROUNDS",
            Self::UnknownWinner(_) => "CODEC_UNKNOWN_WINNER",
            Self::UnknownCondition(_) => "CODEC_UNKNOWN_CONDITION",
            Self::UnknownResult { .. } => "CODEC_UNKNOWN_RESULT",
        }
    }
}
