use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Errors returned when parsing a [`PuzzleSeed`] from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleSeedParseError {
    /// The string is not exactly 64 hex digits long.
    #[display("seed must be 64 hex digits, got {len}")]
    InvalidLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The string contains a character that is not a hex digit.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

/// A 256-bit seed from which a puzzle is generated.
///
/// The same seed, word set and grid size always produce the same puzzle. Seeds are
/// written as 64 lowercase hex digits.
///
/// # Examples
///
/// ```
/// use wordsearch_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
/// );
/// assert_ne!(seed.next(), seed);
/// # Ok::<(), wordsearch_generator::PuzzleSeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives the seed used for the next regeneration attempt.
    ///
    /// The derived seed is the SHA-256 digest of this one, so a chain of
    /// regenerations is reproducible from its first seed.
    #[must_use]
    pub fn next(&self) -> Self {
        Self(Sha256::digest(self.0).into())
    }

    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = PuzzleSeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(PuzzleSeedParseError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        let mut digits = s.chars().map(|ch| {
            ch.to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(PuzzleSeedParseError::InvalidDigit { ch })
        });
        for byte in &mut bytes {
            // `len == 64` guarantees two digits per byte.
            let (Some(hi), Some(lo)) = (digits.next(), digits.next()) else {
                return Err(PuzzleSeedParseError::InvalidLength { len });
            };
            *byte = (hi? << 4) | lo?;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use rand::RngExt as _;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_display_roundtrips_parse() {
        let seed: PuzzleSeed = SEED.parse().unwrap();
        assert_eq!(seed.to_string(), SEED);
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let seed: PuzzleSeed = SEED.to_uppercase().parse().unwrap();
        assert_eq!(seed.to_string(), SEED);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(PuzzleSeedParseError::InvalidLength { len: 3 })
        );
        let bad = format!("{}g", &SEED[..63]);
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(PuzzleSeedParseError::InvalidDigit { ch: 'g' })
        );
    }

    #[test]
    fn test_next_is_deterministic() {
        let seed: PuzzleSeed = SEED.parse().unwrap();
        assert_eq!(seed.next(), seed.next());
        assert_ne!(seed.next(), seed);
        assert_ne!(seed.next().next(), seed.next());
    }

    #[test]
    fn test_rng_is_reproducible() {
        let seed: PuzzleSeed = SEED.parse().unwrap();
        let mut r1 = seed.rng();
        let mut r2 = seed.rng();
        for _ in 0..16 {
            assert_eq!(r1.random_range(0..26_u8), r2.random_range(0..26_u8));
        }
    }
}
