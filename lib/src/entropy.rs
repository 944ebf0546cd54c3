use crate::data::Word;
use crate::results::FeedbackPattern;
use crate::results::WordleError;
use crate::tensor::ResultTensor;
use rayon::prelude::*;

/// A guess along with its position in the list of allowed guesses and its expected information.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    /// The guess's index in the list of allowed guesses, and so in the result tensor.
    pub index: usize,
    /// The expected information gained from this guess, in bits.
    pub entropy: f64,
}

/// Computes the Shannon entropy, in bits, of the distribution of results in one row of a
/// [`ResultTensor`], treating each candidate as equally likely to be the objective.
///
/// An empty row, or one where every candidate gives the same result, has an entropy of zero.
///
/// ```
/// use wordle_entropy_solver::*;
///
/// let candidates = WordBank::from_iterator(&["boxed", "hydro", "allot", "excel"]);
/// let guesses = WordBank::from_iterator(&["boxed"]);
/// let tensor = ResultTensor::build(&candidates, &guesses);
///
/// // All four candidates give a different result, so this is log2(4).
/// assert_eq!(compute_entropy(tensor.row(0).unwrap()), 2.0);
/// ```
pub fn compute_entropy(results: &[FeedbackPattern]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let mut count_per_pattern = [0u32; FeedbackPattern::NUM_PATTERNS];
    for result in results {
        count_per_pattern[result.index()] += 1;
    }
    // Summing in a fixed order means two rows with the same counts always tie exactly.
    let mut counts: Vec<u32> = count_per_pattern
        .into_iter()
        .filter(|count| *count > 0)
        .collect();
    if counts.len() < 2 {
        return 0.0;
    }
    counts.sort_unstable();

    let total = results.len() as f64;
    counts
        .into_iter()
        .map(|count| {
            let probability = count as f64 / total;
            -probability * probability.log2()
        })
        .sum()
}

/// Computes the entropy of every guess in the tensor, in guess order.
pub fn compute_entropies(tensor: &ResultTensor) -> Vec<f64> {
    (0..tensor.num_guesses())
        .into_par_iter()
        .map(|guess_index| tensor.row(guess_index).map_or(0.0, compute_entropy))
        .collect()
}

/// Selects the guess with the highest entropy over the tensor's remaining candidates.
///
/// `guesses` must be the list of allowed guesses that the tensor was built with. Ties go to the
/// guess that comes first in that list.
///
/// ```
/// use wordle_entropy_solver::*;
///
/// let candidates = WordBank::from_iterator(&["boxed", "hydro", "allot"]);
/// let guesses = WordBank::from_iterator(&["quick", "boxed", "hydro"]);
/// let tensor = ResultTensor::build(&candidates, &guesses);
///
/// // "boxed" and "hydro" both split the candidates three ways.
/// let (guess, index) = select_max_entropy_guess(&tensor, &guesses)?;
///
/// assert_eq!(guess, "boxed");
/// assert_eq!(index, 1);
/// # Ok::<(), WordleError>(())
/// ```
pub fn select_max_entropy_guess(
    tensor: &ResultTensor,
    guesses: &[Word],
) -> Result<(Word, usize), WordleError> {
    check_guesses_match(tensor, guesses)?;
    let entropies = compute_entropies(tensor);
    let mut best_index = 0;
    for (index, entropy) in entropies.iter().enumerate() {
        if *entropy > entropies[best_index] {
            best_index = index;
        }
    }
    Ok((guesses[best_index], best_index))
}

/// Returns up to `n` guesses ordered from the highest to the lowest entropy. Guesses with equal
/// entropy keep their order from `guesses`.
pub fn select_top_n_guesses(
    tensor: &ResultTensor,
    guesses: &[Word],
    n: usize,
) -> Result<Vec<ScoredGuess>, WordleError> {
    check_guesses_match(tensor, guesses)?;
    let mut scored: Vec<ScoredGuess> = compute_entropies(tensor)
        .into_iter()
        .zip(guesses)
        .enumerate()
        .map(|(index, (entropy, word))| ScoredGuess {
            word: *word,
            index,
            entropy,
        })
        .collect();
    scored.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));
    scored.truncate(n);
    Ok(scored)
}

fn check_guesses_match(tensor: &ResultTensor, guesses: &[Word]) -> Result<(), WordleError> {
    if guesses.is_empty() {
        return Err(WordleError::NoGuesses);
    }
    if guesses.len() != tensor.num_guesses() {
        return Err(WordleError::ShapeMismatch {
            expected: tensor.num_guesses(),
            actual: guesses.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(patterns: &[&str]) -> Vec<FeedbackPattern> {
        patterns
            .iter()
            .map(|pattern| pattern.parse().unwrap())
            .collect()
    }

    #[test]
    fn compute_entropy_empty() {
        assert_eq!(compute_entropy(&[]), 0.0);
    }

    #[test]
    fn compute_entropy_single_outcome() {
        let entropy = compute_entropy(&patterns(&["g....", "g....", "g...."]));

        assert_eq!(entropy, 0.0);
        assert!(entropy.is_sign_positive());
    }

    #[test]
    fn compute_entropy_uneven_outcomes() {
        let entropy = compute_entropy(&patterns(&["g....", "g....", ".y...", "ggggg"]));

        // p = [1/2, 1/4, 1/4]
        assert!((entropy - 1.5).abs() < 1e-12);
    }

    #[test]
    fn compute_entropy_same_counts_tie_exactly() {
        let first = compute_entropy(&patterns(&["g....", "g....", "g....", ".y...", "..y.."]));
        let second = compute_entropy(&patterns(&["..y..", "ggggg", "ggggg", "ggggg", "....y"]));

        assert_eq!(first, second);
    }
}
