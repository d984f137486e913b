//! Grid letter representation.

use std::fmt::{self, Display};

/// Error returned when a character is not an uppercase ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid letter {ch:?}: expected A-Z")]
pub struct LetterError {
    /// The rejected character.
    pub ch: char,
}

/// A single uppercase ASCII letter `A`-`Z`.
///
/// The alphabet is fixed; every cell of a [`LetterGrid`] holds exactly one
/// letter.
///
/// [`LetterGrid`]: crate::LetterGrid
///
/// # Examples
///
/// ```
/// use wordsearch_core::Letter;
///
/// let letter = Letter::try_from('Q')?;
/// assert_eq!(letter.as_char(), 'Q');
/// assert!(Letter::try_from('q').is_err());
/// assert_eq!(Letter::ALPHABET.len(), 26);
/// # Ok::<(), wordsearch_core::LetterError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Array containing all 26 letters in alphabetical order.
    pub const ALPHABET: [Self; 26] = {
        let mut all = [Self(b'A'); 26];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 26 {
            all[i] = Self(b'A' + i as u8);
            i += 1;
        }
        all
    };

    /// Returns the letter as a `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Returns the lowercase form of the letter, for display purposes.
    #[must_use]
    pub const fn to_ascii_lowercase(self) -> char {
        self.0.to_ascii_lowercase() as char
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match u8::try_from(ch) {
            Ok(byte) if byte.is_ascii_uppercase() => Ok(Self(byte)),
            _ => Err(LetterError { ch }),
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
