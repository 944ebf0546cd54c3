use crate::data::Word;
use crate::data::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a given letter at a specific location.
///
/// The discriminants are the numeric codes used when labelling a [`FeedbackPattern`].
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterResult {
    NotPresent = 0,
    PresentNotHere = 1,
    Correct = 2,
}

impl LetterResult {
    fn from_code(code: u8) -> Option<LetterResult> {
        match code {
            0 => Some(LetterResult::NotPresent),
            1 => Some(LetterResult::PresentNotHere),
            2 => Some(LetterResult::Correct),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            LetterResult::NotPresent => '.',
            LetterResult::PresentNotHere => 'y',
            LetterResult::Correct => 'g',
        }
    }
}

/// Indicates that an error occurred while building or playing a game.
#[derive(Debug, Error)]
pub enum WordleError {
    /// Indicates that a word did not have the required number of letters. Provides the actual
    /// length.
    #[error("Words must have exactly 5 letters, got {0}")]
    WordLength(usize),
    /// Indicates that the given character is not an ASCII letter.
    #[error("Unsupported character: {0:?}")]
    UnsupportedCharacter(char),
    /// Indicates that a feedback pattern string could not be parsed.
    #[error("Invalid result pattern: {0:?}")]
    InvalidPattern(String),
    /// Indicates that there were no candidate words to choose from.
    #[error("There are no candidate words")]
    NoCandidates,
    /// Indicates that there were no allowed guesses to choose from.
    #[error("There are no allowed guesses")]
    NoGuesses,
    /// Indicates that a comparison was requested with zero trials.
    #[error("At least one trial is required")]
    NoTrials,
    /// Indicates that a guess index does not exist in the result tensor.
    #[error("Guess index {index} is out of range for {len} guesses")]
    GuessIndexOutOfRange { index: usize, len: usize },
    /// Indicates that a word list does not line up with the result tensor.
    #[error("Expected {expected} words to match the result tensor, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    /// Indicates that the observed results are inconsistent with every candidate, so the secret
    /// word must not be in the candidate list.
    #[error("No candidate word is consistent with the observed results")]
    InvalidResults,
    /// Indicates that the given number of candidates remain, but no allowed guess can tell them
    /// apart.
    #[error("{0} candidates remain that no allowed guess can distinguish")]
    Indistinguishable(usize),
    /// Indicates that a guess was made before the game was started.
    #[error("The game has not been started")]
    GameNotStarted,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The results of every letter in a single guess, in the same order as the guess's letters.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeedbackPattern([LetterResult; WORD_LENGTH]);

impl FeedbackPattern {
    /// The number of distinct patterns, i.e. 3<sup>5</sup>.
    pub const NUM_PATTERNS: usize = 243;

    /// The pattern returned when the guess is the objective word.
    pub const ALL_CORRECT: FeedbackPattern = FeedbackPattern([LetterResult::Correct; WORD_LENGTH]);

    pub fn new(results: [LetterResult; WORD_LENGTH]) -> FeedbackPattern {
        FeedbackPattern(results)
    }

    pub fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    /// Returns a label that is unique to this pattern, in the range `0..NUM_PATTERNS`.
    ///
    /// Each letter's result is treated as a base-3 digit, with the first letter as the least
    /// significant digit.
    ///
    /// ```
    /// use wordle_entropy_solver::FeedbackPattern;
    ///
    /// let pattern: FeedbackPattern = "y.g..".parse().unwrap();
    /// assert_eq!(pattern.index(), 1 + 2 * 9);
    /// ```
    pub fn index(&self) -> usize {
        self.0
            .iter()
            .rev()
            .fold(0, |acc, result| acc * 3 + *result as usize)
    }

    /// The inverse of [`FeedbackPattern::index()`]. Returns `None` if the index is out of range.
    pub fn from_index(mut index: usize) -> Option<FeedbackPattern> {
        if index >= Self::NUM_PATTERNS {
            return None;
        }
        let mut results = [LetterResult::NotPresent; WORD_LENGTH];
        for result in results.iter_mut() {
            *result = LetterResult::from_code((index % 3) as u8)?;
            index /= 3;
        }
        Some(FeedbackPattern(results))
    }

    /// Returns `true` iff every letter is correct.
    pub fn is_correct(&self) -> bool {
        *self == Self::ALL_CORRECT
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in self.0 {
            write!(f, "{}", result.to_char())?;
        }
        Ok(())
    }
}

/// Parses patterns such as `"g.y.."`, where `.` is not present, `y` is present somewhere else,
/// and `g` is correct. The digits `0`, `1` and `2` are accepted as well.
impl FromStr for FeedbackPattern {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let num_chars = s.chars().count();
        if num_chars != WORD_LENGTH {
            return Err(WordleError::WordLength(num_chars));
        }
        let mut results = [LetterResult::NotPresent; WORD_LENGTH];
        for (result, letter) in results.iter_mut().zip(s.chars()) {
            *result = match letter.to_ascii_lowercase() {
                '.' | '0' => LetterResult::NotPresent,
                'y' | '1' => LetterResult::PresentNotHere,
                'g' | '2' => LetterResult::Correct,
                _ => return Err(WordleError::InvalidPattern(s.to_string())),
            };
        }
        Ok(FeedbackPattern(results))
    }
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Exact matches are credited first, then the remaining letters are marked as present only as
/// many times as the letter is still unaccounted for in the objective.
///
/// ```
/// use wordle_entropy_solver::*;
///
/// let objective = Word::new("boxed")?;
/// let guess = Word::new("excel")?;
///
/// assert_eq!(get_result_for_guess(&objective, &guess).to_string(), ".y.g.");
/// # Ok::<(), WordleError>(())
/// ```
pub fn get_result_for_guess(objective: &Word, guess: &Word) -> FeedbackPattern {
    let objective = objective.letters();
    let guess = guess.letters();
    let mut remaining_per_letter = [0u8; 26];
    for letter in objective {
        remaining_per_letter[letter_index(*letter)] += 1;
    }

    let mut results = [LetterResult::NotPresent; WORD_LENGTH];
    for index in 0..WORD_LENGTH {
        if guess[index] == objective[index] {
            results[index] = LetterResult::Correct;
            remaining_per_letter[letter_index(guess[index])] -= 1;
        }
    }
    for index in 0..WORD_LENGTH {
        if results[index] == LetterResult::Correct {
            continue;
        }
        let remaining = &mut remaining_per_letter[letter_index(guess[index])];
        if *remaining > 0 {
            results[index] = LetterResult::PresentNotHere;
            *remaining -= 1;
        }
    }
    FeedbackPattern(results)
}

/// Like [`get_result_for_guess`], but accepts unchecked strings.
///
/// Returns [`WordleError::WordLength`] if either word does not have exactly five letters.
pub fn get_result_for_str(objective: &str, guess: &str) -> Result<FeedbackPattern, WordleError> {
    let objective = Word::new(objective)?;
    let guess = Word::new(guess)?;
    Ok(get_result_for_guess(&objective, &guess))
}

#[inline]
fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}
