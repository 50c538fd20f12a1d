//! Seed stream for deterministic random draws.
//!
//! The duel is driven by one 256-bit seed. Every decision point re-hashes the
//! current state with SHA-256 and reduces the low 64 bits of the digest into
//! the requested range:
//!
//! ```text
//! state₀ = seed
//! stateₙ₊₁ = sha256(stateₙ)
//! drawₙ = low64(stateₙ₊₁) mod bound
//! ```
//!
//! # Determinism
//!
//! [`SeedStream`] is a `Copy` value: each draw consumes the stream and returns
//! its successor, so a draw can never be read twice and the order of draws is
//! visible at every call site.

use sha2::{Digest, Sha256};

/// Opaque 256-bit seed supplied by the randomness collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seed(pub [u8; 32]);

impl Seed {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Seed whose big-endian integer value is `value`.
    pub const fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        let tail = value.to_be_bytes();
        let mut i = 0;
        while i < 8 {
            bytes[24 + i] = tail[i];
            i += 1;
        }
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Seed `n` steps after this one, as a big-endian integer wrapping at 2²⁵⁶.
    pub fn offset(self, n: u64) -> Self {
        let mut bytes = self.0;
        let mut carry = u128::from(n);
        for byte in bytes.iter_mut().rev() {
            if carry == 0 {
                break;
            }
            let sum = u128::from(*byte) + (carry & 0xff);
            *byte = sum as u8;
            carry = (carry >> 8) + (sum >> 8);
        }
        Self(bytes)
    }
}

impl From<[u8; 32]> for Seed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

/// Hash-chain stream of uniform draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedStream {
    state: [u8; 32],
    draws: u32,
}

impl SeedStream {
    pub const fn new(seed: Seed) -> Self {
        Self {
            state: seed.0,
            draws: 0,
        }
    }

    /// Draws a value in `[0, bound)` and returns the advanced stream.
    ///
    /// A zero `bound` yields 0 but still advances the chain.
    #[must_use]
    pub fn next_uniform(self, bound: u32) -> (u32, Self) {
        let digest: [u8; 32] = Sha256::digest(self.state).into();

        let mut low = [0u8; 8];
        low.copy_from_slice(&digest[24..]);
        let raw = u64::from_be_bytes(low);

        let value = if bound == 0 {
            0
        } else {
            (raw % u64::from(bound)) as u32
        };

        let next = Self {
            state: digest,
            draws: self.draws.saturating_add(1),
        };
        (value, next)
    }

    /// Percentage roll in `[0, 100)`. A check succeeds when `roll < chance`.
    #[must_use]
    pub fn roll_percent(self) -> (u32, Self) {
        self.next_uniform(100)
    }

    /// Uniform value in `[min, max]` inclusive.
    ///
    /// An inverted range collapses to `min`; the chain still advances.
    #[must_use]
    pub fn range_inclusive(self, min: u32, max: u32) -> (u32, Self) {
        let span = max.saturating_sub(min).saturating_add(1);
        let (offset, next) = self.next_uniform(span);
        (min.saturating_add(offset), next)
    }

    /// Fair coin. `true` and `false` are equally likely.
    #[must_use]
    pub fn coin_flip(self) -> (bool, Self) {
        let (bit, next) = self.next_uniform(2);
        (bit == 1, next)
    }

    /// Number of draws consumed so far.
    pub const fn draws(&self) -> u32 {
        self.draws
    }

    /// Current chain state.
    pub const fn state(&self) -> &[u8; 32] {
        &self.state
    }
}

impl From<Seed> for SeedStream {
    fn from(seed: Seed) -> Self {
        Self::new(seed)
    }
}
