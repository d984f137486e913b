//! Target words and word sets.

use std::{
    collections::{BTreeSet, btree_set},
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Letter, LetterError};

/// Errors that can occur while parsing a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The word has no letters.
    #[display("word is empty")]
    Empty,
    /// The word contains a character outside `A`-`Z` after uppercasing.
    #[display("word {word:?} contains invalid character {ch:?}")]
    InvalidCharacter {
        /// The rejected input.
        word: String,
        /// The first offending character.
        ch: char,
    },
}

/// A target word: a non-empty sequence of uppercase letters.
///
/// Parsing trims surrounding whitespace and uppercases ASCII letters, so
/// `" apple "` and `"APPLE"` denote the same word. Any other character is
/// rejected.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Word;
///
/// let word: Word = " apple ".parse()?;
/// assert_eq!(word.to_string(), "APPLE");
/// assert_eq!(word.len(), 5);
/// assert!("big apple".parse::<Word>().is_err());
/// # Ok::<(), wordsearch_core::WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(Vec<Letter>);

impl Word {
    /// Creates a word from its letters.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Empty`] if `letters` is empty.
    pub fn from_letters(letters: Vec<Letter>) -> Result<Self, WordError> {
        if letters.is_empty() {
            return Err(WordError::Empty);
        }
        Ok(Self(letters))
    }

    /// Returns the letters of the word in reading order.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; words are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters = s
            .trim()
            .chars()
            .map(|ch| {
                Letter::try_from(ch.to_ascii_uppercase()).map_err(|LetterError { ch }| {
                    WordError::InvalidCharacter {
                        word: s.to_owned(),
                        ch,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_letters(letters)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// The set of target words of a puzzle.
///
/// Duplicates collapse to one entry and iteration is in alphabetical order, so
/// the order words were supplied in never matters.
///
/// # Examples
///
/// ```
/// use wordsearch_core::WordSet;
///
/// let words = WordSet::parse(["tiger", "LION", "lion", "cub"])?;
/// assert_eq!(words.len(), 3);
/// assert_eq!(words.max_len(), 5);
/// let names: Vec<_> = words.iter().map(ToString::to_string).collect();
/// assert_eq!(names, ["CUB", "LION", "TIGER"]);
/// # Ok::<(), wordsearch_core::WordError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeSet<Word>,
}

impl WordSet {
    /// Creates an empty word set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every string into a [`Word`] and collects them into a set.
    ///
    /// # Errors
    ///
    /// Returns the first [`WordError`] encountered.
    pub fn parse<I, S>(words: I) -> Result<Self, WordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().map(|s| s.as_ref().parse()).collect()
    }

    /// Inserts a word, returning `false` if it was already present.
    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
    }

    /// Returns `true` if the set contains the word.
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the length of the longest word, or `0` for an empty set.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.words.iter().map(Word::len).max().unwrap_or(0)
    }

    /// Returns an iterator over the words in alphabetical order.
    pub fn iter(&self) -> btree_set::Iter<'_, Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for WordSet {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a Word;
    type IntoIter = btree_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!("".parse::<Word>(), Err(WordError::Empty));
        assert_eq!("   ".parse::<Word>(), Err(WordError::Empty));
    }

    #[test]
    fn test_parse_reports_offending_character() {
        assert_eq!(
            "ice-cream".parse::<Word>(),
            Err(WordError::InvalidCharacter {
                word: "ice-cream".to_owned(),
                ch: '-',
            })
        );
    }

    #[test]
    fn test_word_order_matches_string_order() {
        let mut words: Vec<Word> = ["DATE", "APPLE", "CHERRY", "BANANA"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        words.sort();
        let names: Vec<_> = words.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["APPLE", "BANANA", "CHERRY", "DATE"]);
    }

    #[test]
    fn test_word_set_collapses_case_insensitive_duplicates() {
        let mut words = WordSet::parse(["Mouse", "MOUSE"]).unwrap();
        assert_eq!(words.len(), 1);
        assert!(!words.insert("mouse".parse().unwrap()));
        assert!(words.insert("desk".parse().unwrap()));
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_empty_word_set() {
        let words = WordSet::new();
        assert!(words.is_empty());
        assert_eq!(words.max_len(), 0);
    }
}
