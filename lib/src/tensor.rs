use crate::data::Word;
use crate::results::get_result_for_guess;
use crate::results::FeedbackPattern;
use crate::results::WordleError;
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of every allowed guess against every candidate word.
///
/// Conceptually this is a `[guess][candidate][letter]` array. It is stored as one row of
/// [`FeedbackPattern`]s per guess, laid out contiguously.
///
/// Once built, a tensor is never modified. Narrowing it down to fewer candidates produces a new
/// tensor, so a single precomputed tensor can be shared by any number of games.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawResultTensor")
)]
pub struct ResultTensor {
    num_guesses: usize,
    num_candidates: usize,
    results: Vec<FeedbackPattern>,
}

/// A deserialized tensor whose shape has not been checked yet.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawResultTensor {
    num_guesses: usize,
    num_candidates: usize,
    results: Vec<FeedbackPattern>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawResultTensor> for ResultTensor {
    type Error = WordleError;

    fn try_from(raw: RawResultTensor) -> Result<Self, Self::Error> {
        let expected = raw
            .num_guesses
            .checked_mul(raw.num_candidates)
            .unwrap_or(usize::MAX);
        if raw.results.len() != expected {
            return Err(WordleError::ShapeMismatch {
                expected,
                actual: raw.results.len(),
            });
        }
        Ok(ResultTensor {
            num_guesses: raw.num_guesses,
            num_candidates: raw.num_candidates,
            results: raw.results,
        })
    }
}

impl ResultTensor {
    /// Computes the result of each guess in `guesses` for each objective word in `candidates`.
    /// **This is expensive for large word lists!**
    ///
    /// The cost scales in *O*(*g* × *c*), where *g* is the number of guesses and *c* is the
    /// number of candidates. Rows are computed in parallel.
    ///
    /// ```
    /// use wordle_entropy_solver::*;
    ///
    /// let candidates = WordBank::from_iterator(&["boxed", "hydro"]);
    /// let guesses = WordBank::from_iterator(&["excel", "boxed", "hydro"]);
    /// let tensor = ResultTensor::build(&candidates, &guesses);
    ///
    /// assert_eq!(tensor.num_guesses(), 3);
    /// assert_eq!(tensor.num_candidates(), 2);
    /// assert_eq!(tensor.get(0, 0).unwrap().to_string(), ".y.g.");
    /// ```
    pub fn build(candidates: &[Word], guesses: &[Word]) -> ResultTensor {
        log::info!(
            "Computing results for {} guesses against {} candidates",
            guesses.len(),
            candidates.len()
        );
        let results: Vec<FeedbackPattern> = guesses
            .par_iter()
            .flat_map_iter(|guess| {
                candidates
                    .iter()
                    .map(move |candidate| get_result_for_guess(candidate, guess))
            })
            .collect();
        ResultTensor {
            num_guesses: guesses.len(),
            num_candidates: candidates.len(),
            results,
        }
    }

    pub fn num_guesses(&self) -> usize {
        self.num_guesses
    }

    pub fn num_candidates(&self) -> usize {
        self.num_candidates
    }

    /// Retrieves the result of the given guess against the given candidate.
    pub fn get(&self, guess_index: usize, candidate_index: usize) -> Option<FeedbackPattern> {
        if candidate_index >= self.num_candidates {
            return None;
        }
        self.row(guess_index)
            .map(|row| row[candidate_index])
    }

    /// Retrieves the results of the given guess against every candidate, in candidate order.
    pub fn row(&self, guess_index: usize) -> Option<&[FeedbackPattern]> {
        if guess_index >= self.num_guesses {
            return None;
        }
        let start = guess_index * self.num_candidates;
        Some(&self.results[start..start + self.num_candidates])
    }

    /// Iterates over every guess's row.
    pub fn rows(&self) -> impl Iterator<Item = &[FeedbackPattern]> + '_ {
        (0..self.num_guesses).map(move |guess_index| {
            let start = guess_index * self.num_candidates;
            &self.results[start..start + self.num_candidates]
        })
    }

    /// Creates a new tensor containing only the given candidates, in the given order. The guess
    /// axis is unchanged.
    ///
    /// Every index must be less than [`ResultTensor::num_candidates()`].
    pub fn select_candidates(&self, candidate_indices: &[usize]) -> ResultTensor {
        let mut results = Vec::with_capacity(self.num_guesses * candidate_indices.len());
        for row in self.rows() {
            results.extend(candidate_indices.iter().map(|&index| row[index]));
        }
        ResultTensor {
            num_guesses: self.num_guesses,
            num_candidates: candidate_indices.len(),
            results,
        }
    }

    /// Returns `true` if at least one guess would give different results for two of the
    /// candidates.
    pub fn can_distinguish_candidates(&self) -> bool {
        self.rows()
            .any(|row| row.iter().any(|result| *result != row[0]))
    }
}

/// Filters the candidate words down to those that would have produced the `observed` result for
/// the guess at `guess_index`.
///
/// Returns the remaining candidates, in their original order, along with a new tensor that only
/// contains results for those candidates.
///
/// ```
/// use wordle_entropy_solver::*;
///
/// let candidates: Vec<Word> = WordBank::from_iterator(&["boxed", "hydro", "excel"]).into();
/// let guesses = WordBank::from_iterator(&["hydro"]);
/// let tensor = ResultTensor::build(&candidates, &guesses);
/// let observed = get_result_for_guess(&Word::new("hydro")?, &guesses[0]);
///
/// let (remaining, tensor) = filter_candidates(&tensor, &candidates, 0, observed)?;
///
/// assert_eq!(remaining, vec![Word::new("hydro")?]);
/// assert_eq!(tensor.num_candidates(), 1);
/// # Ok::<(), WordleError>(())
/// ```
pub fn filter_candidates(
    tensor: &ResultTensor,
    candidates: &[Word],
    guess_index: usize,
    observed: FeedbackPattern,
) -> Result<(Vec<Word>, ResultTensor), WordleError> {
    if candidates.len() != tensor.num_candidates() {
        return Err(WordleError::ShapeMismatch {
            expected: tensor.num_candidates(),
            actual: candidates.len(),
        });
    }
    let row = tensor
        .row(guess_index)
        .ok_or(WordleError::GuessIndexOutOfRange {
            index: guess_index,
            len: tensor.num_guesses(),
        })?;
    let matching_indices: Vec<usize> = row
        .iter()
        .enumerate()
        .filter_map(|(index, result)| (*result == observed).then_some(index))
        .collect();
    let remaining = matching_indices
        .iter()
        .map(|&index| candidates[index])
        .collect();
    Ok((remaining, tensor.select_candidates(&matching_indices)))
}
