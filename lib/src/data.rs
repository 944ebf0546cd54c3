use crate::results::WordleError;
use std::collections::HashSet;
use std::fmt;
use std::fmt::Write;
use std::io::BufRead;
use std::ops::Deref;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of letters in every word.
pub const WORD_LENGTH: usize = 5;

/// A five-letter word made of lowercase ASCII letters.
///
/// With the `serde` feature, a word is stored as its string form and checked on the way back in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Constructs a word from the given string, converting it to lower case.
    ///
    /// ```
    /// use wordle_entropy_solver::Word;
    ///
    /// assert_eq!(Word::new("Hydro").unwrap(), "hydro");
    /// assert!(Word::new("hydros").is_err());
    /// ```
    pub fn new(word: &str) -> Result<Word, WordleError> {
        let num_chars = word.chars().count();
        if num_chars != WORD_LENGTH {
            return Err(WordleError::WordLength(num_chars));
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, letter) in letters.iter_mut().zip(word.chars()) {
            if !letter.is_ascii_alphabetic() {
                return Err(WordleError::UnsupportedCharacter(letter));
            }
            *slot = letter.to_ascii_lowercase() as u8;
        }
        Ok(Word(letters))
    }

    /// The letters of this word as lowercase ASCII bytes.
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            f.write_char(letter as char)?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::new(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Word::new(value)
    }
}

impl TryFrom<String> for Word {
    type Error = WordleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Word::new(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.to_string()
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0.as_slice() == other.as_bytes()
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// Contains a list of words, such as the possible secret words or the allowed guesses.
///
/// Words keep the order in which they were given. Entries that are not exactly five letters long
/// once trimmed are skipped, as are repeats of an earlier word.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word will be converted to lower case.
    /// Malformed lines, including ones that are not valid UTF-8, are dropped without an error;
    /// only I/O failures are returned.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let mut lines = Vec::new();
        for line in word_reader.split(b'\n') {
            if let Ok(line) = String::from_utf8(line?) {
                lines.push(line);
            }
        }
        Ok(WordBank::from_iterator(lines))
    }

    /// Constructs a new `WordBank` using the words from the given iterator.
    ///
    /// ```
    /// use wordle_entropy_solver::WordBank;
    ///
    /// let bank = WordBank::from_iterator(&["Crane", " slate ", "toolong", "crane"]);
    ///
    /// assert_eq!(bank.len(), 2);
    /// assert_eq!(bank[1], "slate");
    /// ```
    pub fn from_iterator<S>(words: impl IntoIterator<Item = S>) -> Self
    where
        S: AsRef<str>,
    {
        let mut seen: HashSet<Word> = HashSet::new();
        let words = words
            .into_iter()
            .filter_map(|word| Word::new(word.as_ref().trim()).ok())
            .filter(|word| seen.insert(*word))
            .collect();
        WordBank { words }
    }

    /// Retrieves the full list of words.
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl Deref for WordBank {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl From<WordBank> for Vec<Word> {
    fn from(bank: WordBank) -> Self {
        bank.words
    }
}
