//! Binary action log codec.
//!
//! This layout is the wire format consumers decode to settle a duel and
//! replay it. Changing it requires a new version.
//!
//! ```text
//! offset  size  field
//! 0       1     winner (1 = side one, 2 = side two)
//! 1       1     win condition (0 health, 1 exhaustion, 2 max rounds)
//! 2 + 8n  1     attacker result code
//!         2     attacker damage (big-endian)
//!         1     attacker stamina
//!         1     defender result code
//!         2     defender damage (big-endian)
//!         1     defender stamina
//! ```
//!
//! Length is always `2 + 8 × rounds`, with at most
//! [`CombatRules::MAX_ROUNDS`] rounds.

mod error;

pub use error::CodecError;

use arrayvec::ArrayVec;

use crate::combat::{ActionOutcome, CombatAction, CombatResultType, Side, WinCondition};
use crate::config::CombatRules;
use crate::engine::CombatLog;

/// Header bytes before the first record.
pub const HEADER_LEN: usize = 2;
/// Bytes per round record.
pub const RECORD_LEN: usize = 8;
/// Largest valid encoded log.
pub const MAX_ENCODED_LEN: usize = HEADER_LEN + RECORD_LEN * CombatRules::MAX_ROUNDS;

/// Encoded size of a log with `rounds` records.
pub const fn encoded_len(rounds: usize) -> usize {
    HEADER_LEN + RECORD_LEN * rounds
}

/// Serializes a combat log.
pub fn encode(log: &CombatLog) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(encoded_len(log.actions.len()));
    bytes.push(log.winner.as_byte());
    bytes.push(log.condition.code());
    for action in &log.actions {
        write_outcome(&mut bytes, &action.attacker);
        write_outcome(&mut bytes, &action.defender);
    }
    bytes
}

/// Parses a combat log.
///
/// # Errors
///
/// Fails on a short or misaligned buffer, more than `MAX_ROUNDS` records, or
/// any byte outside its enum's range.
pub fn decode(bytes: &[u8]) -> Result<CombatLog, CodecError> {
    let (winner, condition, body) = split_header(bytes)?;

    let mut actions = ArrayVec::new();
    for (round, record) in body.chunks_exact(RECORD_LEN).enumerate() {
        let attacker = read_outcome(&record[..4], round)?;
        let defender = read_outcome(&record[4..], round)?;
        actions
            .try_push(CombatAction::new(attacker, defender))
            .map_err(|_| CodecError::TooManyRounds {
                rounds: body.len() / RECORD_LEN,
                max: CombatRules::MAX_ROUNDS,
            })?;
    }

    Ok(CombatLog {
        winner,
        condition,
        actions,
    })
}

/// Reads the outcome without decoding the rounds.
///
/// The buffer shape is still checked, so a settled outcome always comes from a
/// log that has a valid length.
///
/// # Errors
///
/// Same length and header errors as [`decode`].
pub fn peek_outcome(bytes: &[u8]) -> Result<(Side, WinCondition), CodecError> {
    let (winner, condition, _) = split_header(bytes)?;
    Ok((winner, condition))
}

fn split_header(bytes: &[u8]) -> Result<(Side, WinCondition, &[u8]), CodecError> {
    let Some((header, body)) = bytes.split_first_chunk::<HEADER_LEN>() else {
        return Err(CodecError::TooShort {
            len: bytes.len(),
            header: HEADER_LEN,
        });
    };

    if body.len() % RECORD_LEN != 0 {
        return Err(CodecError::Misaligned {
            body: body.len(),
            record: RECORD_LEN,
        });
    }
    let rounds = body.len() / RECORD_LEN;
    if rounds > CombatRules::MAX_ROUNDS {
        return Err(CodecError::TooManyRounds {
            rounds,
            max: CombatRules::MAX_ROUNDS,
        });
    }

    let winner = Side::from_byte(header[0]).ok_or(CodecError::UnknownWinner(header[0]))?;
    let condition =
        WinCondition::from_code(header[1]).ok_or(CodecError::UnknownCondition(header[1]))?;
    Ok((winner, condition, body))
}

fn write_outcome(bytes: &mut Vec<u8>, outcome: &ActionOutcome) {
    bytes.push(outcome.result.code());
    bytes.extend_from_slice(&outcome.damage.to_be_bytes());
    bytes.push(outcome.stamina);
}

fn read_outcome(chunk: &[u8], round: usize) -> Result<ActionOutcome, CodecError> {
    let code = chunk[0];
    let result =
        CombatResultType::from_code(code).ok_or(CodecError::UnknownResult { round, code })?;
    let damage = u16::from_be_bytes([chunk[1], chunk[2]]);
    Ok(ActionOutcome::new(result, damage, chunk[3]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    fn sample_log() -> CombatLog {
        let mut log = CombatLog::new(Side::Two, WinCondition::Health);
        log.actions.push(CombatAction::new(
            ActionOutcome::new(CombatResultType::Crit, 0x0102, 9),
            ActionOutcome::new(CombatResultType::CounterCrit, 0xBEEF, 15),
        ));
        log.actions.push(CombatAction::new(
            ActionOutcome::new(CombatResultType::Miss, 0, 2),
            ActionOutcome::idle(),
        ));
        log
    }

    #[test]
    fn encodes_the_documented_layout() {
        let bytes = encode(&sample_log());
        assert_eq!(
            hex::encode(&bytes),
            concat!("0200", "0201020905beef0f", "0000000200000000")
        );
        assert_eq!(bytes.len(), encoded_len(2));
    }

    #[test]
    fn decode_reverses_encode() {
        let log = sample_log();
        assert_eq!(decode(&encode(&log)).unwrap(), log);

        let empty = CombatLog::new(Side::One, WinCondition::Exhaustion);
        let bytes = encode(&empty);
        assert_eq!(bytes, [1, 1]);
        assert_eq!(decode(&bytes).unwrap(), empty);
    }

    #[test]
    fn full_log_round_trips() {
        let mut log = CombatLog::new(Side::One, WinCondition::MaxRounds);
        for round in 0..CombatRules::MAX_ROUNDS {
            let result = CombatResultType::from_code((round % 12) as u8).unwrap();
            log.actions.push(CombatAction::new(
                ActionOutcome::new(result, u16::MAX - round as u16, round as u8),
                ActionOutcome::new(CombatResultType::Hit, round as u16, u8::MAX),
            ));
        }
        let bytes = encode(&log);
        assert_eq!(bytes.len(), MAX_ENCODED_LEN);
        assert_eq!(decode(&bytes).unwrap(), log);
    }

    #[test]
    fn rejects_short_buffers() {
        assert_eq!(
            decode(&[]),
            Err(CodecError::TooShort { len: 0, header: 2 })
        );
        assert_eq!(
            peek_outcome(&[1]),
            Err(CodecError::TooShort { len: 1, header: 2 })
        );
    }

    #[test]
    fn rejects_misaligned_bodies() {
        let mut bytes = encode(&sample_log());
        bytes.pop();
        let err = decode(&bytes).unwrap_err();
        assert_eq!(err, CodecError::Misaligned { body: 15, record: 8 });
        assert_eq!(err.error_code(), "CODEC_MISALIGNED");
    }

    #[test]
    fn rejects_oversized_logs() {
        let bytes = vec![0u8; encoded_len(CombatRules::MAX_ROUNDS + 1)];
        let mut bytes = bytes;
        bytes[0] = 1;
        assert_eq!(
            decode(&bytes),
            Err(CodecError::TooManyRounds { rounds: 51, max: 50 })
        );
    }

    #[test]
    fn rejects_unknown_codes() {
        let mut bytes = encode(&sample_log());

        bytes[14] = 12;
        assert_eq!(
            decode(&bytes),
            Err(CodecError::UnknownResult { round: 1, code: 12 })
        );

        bytes[0] = 3;
        assert_eq!(decode(&bytes), Err(CodecError::UnknownWinner(3)));

        bytes[0] = 0;
        assert_eq!(peek_outcome(&bytes), Err(CodecError::UnknownWinner(0)));

        bytes[0] = 1;
        bytes[1] = 9;
        assert_eq!(peek_outcome(&bytes), Err(CodecError::UnknownCondition(9)));
    }

    #[test]
    fn peek_skips_round_decoding() {
        let mut bytes = encode(&sample_log());
        bytes[2] = 0xFF;
        assert_eq!(peek_outcome(&bytes), Ok((Side::Two, WinCondition::Health)));
        assert!(decode(&bytes).is_err());
    }
}
