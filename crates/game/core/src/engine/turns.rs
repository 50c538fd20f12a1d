//! Initiative and turn scheduling.
//!
//! Turn ownership runs on action points:
//!
//! ```text
//! every round:   points[s] += tempo[s]           for both sides
//! round 1:       attacker = initiative winner
//! later rounds:  attacker = side with more points
//!                (tie → side that did not attack last)
//! then:          points[attacker] -= tempo[One] + tempo[Two]
//! ```
//!
//! Equal tempos give strict alternation. Unequal tempos give each side a
//! share of rounds proportional to its tempo, and exactly one side attacks
//! per round either way.

use crate::combat::Side;
use crate::env::SeedStream;
use crate::stats::FighterProfile;

/// Picks the round-1 attacker.
///
/// Higher effective initiative goes first; an exact tie is settled by a coin
/// flip so neither slot is favored. Draws only on a tie.
#[must_use]
pub fn opening_side(
    one: &FighterProfile,
    two: &FighterProfile,
    stream: SeedStream,
) -> (Side, SeedStream) {
    let (a, b) = (one.effective_initiative(), two.effective_initiative());
    if a > b {
        (Side::One, stream)
    } else if b > a {
        (Side::Two, stream)
    } else {
        let (heads, stream) = stream.coin_flip();
        (if heads { Side::One } else { Side::Two }, stream)
    }
}

/// Action-point turn scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnScheduler {
    tempo: [i64; 2],
    points: [i64; 2],
    opener: Side,
    last: Option<Side>,
}

impl TurnScheduler {
    pub fn new(tempo_one: u32, tempo_two: u32, opener: Side) -> Self {
        Self {
            tempo: [i64::from(tempo_one), i64::from(tempo_two)],
            points: [0; 2],
            opener,
            last: None,
        }
    }

    pub fn from_profiles(one: &FighterProfile, two: &FighterProfile, opener: Side) -> Self {
        Self::new(one.tempo(), two.tempo(), opener)
    }

    /// Picks the attacker for the next round.
    pub fn next_attacker(&mut self) -> Side {
        for side in Side::BOTH {
            self.points[side.index()] += self.tempo[side.index()];
        }

        let attacker = match self.last {
            None => self.opener,
            Some(last) => {
                let (one, two) = (self.points[0], self.points[1]);
                if one > two {
                    Side::One
                } else if two > one {
                    Side::Two
                } else {
                    last.opponent()
                }
            }
        };

        self.points[attacker.index()] -= self.tempo[0] + self.tempo[1];
        self.last = Some(attacker);
        attacker
    }
}
