#[macro_use]
extern crate assert_matches;

use wordle_entropy_solver::*;

use std::result::Result;

const WORDS: [&str; 10] = [
    "hydro", "boxed", "allot", "excel", "lulls", "crane", "slate", "drown", "proud", "hyena",
];

#[test]
fn build_matches_get_result_for_guess() {
    let candidates = WordBank::from_iterator(&WORDS[..6]);
    let guesses = WordBank::from_iterator(&WORDS);

    let tensor = ResultTensor::build(&candidates, &guesses);

    assert_eq!(tensor.num_guesses(), guesses.len());
    assert_eq!(tensor.num_candidates(), candidates.len());
    for (guess_index, guess) in guesses.iter().enumerate() {
        let row = tensor.row(guess_index).unwrap();
        assert_eq!(row.len(), candidates.len());
        for (candidate, result) in candidates.iter().zip(row) {
            assert_eq!(*result, get_result_for_guess(candidate, guess));
        }
    }
}

#[test]
fn filter_candidates_keeps_matching_candidate() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(&WORDS);
    let tensor = ResultTensor::build(&bank, &bank);

    for guess_index in 0..bank.len() {
        for (candidate_index, candidate) in bank.iter().enumerate() {
            let observed = tensor.get(guess_index, candidate_index).unwrap();

            let (remaining, filtered) = filter_candidates(&tensor, &bank, guess_index, observed)?;

            assert!(remaining.contains(candidate));
            assert!(remaining.len() <= bank.len());
            assert_eq!(filtered.num_candidates(), remaining.len());
            assert_eq!(filtered.num_guesses(), tensor.num_guesses());
            for word in &remaining {
                assert_eq!(get_result_for_guess(word, &bank[guess_index]), observed);
            }
        }
    }
    Ok(())
}

#[test]
fn filter_candidates_preserves_order_and_slices_tensor() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(&["hydro", "boxed", "proud", "drown"]);
    let guesses = WordBank::from_iterator(&["claim", "hydro"]);
    let tensor = ResultTensor::build(&bank, &guesses);
    let observed = tensor.get(0, 0).unwrap();

    // "claim" shares no letters with any candidate, so nothing is removed.
    let (remaining, filtered) = filter_candidates(&tensor, &bank, 0, observed)?;

    assert_eq!(remaining, bank.to_vec());
    assert_eq!(filtered, tensor);

    let observed = get_result_for_guess(&Word::new("boxed")?, &guesses[1]);
    let (remaining, filtered) = filter_candidates(&tensor, &bank, 1, observed)?;

    assert_eq!(remaining, vec![Word::new("boxed")?]);
    assert_eq!(filtered.row(1), Some(&[observed][..]));
    Ok(())
}

#[test]
fn filter_candidates_does_not_modify_tensor() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(&WORDS);
    let tensor = ResultTensor::build(&bank, &bank);
    let original = tensor.clone();

    let (remaining, filtered) =
        filter_candidates(&tensor, &bank, 0, FeedbackPattern::ALL_CORRECT)?;

    assert_eq!(remaining, vec![bank[0]]);
    assert_eq!(filtered.num_candidates(), 1);
    assert_eq!(tensor, original);
    Ok(())
}

#[test]
fn filter_candidates_no_match() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(&WORDS);
    let tensor = ResultTensor::build(&bank, &bank);

    let (remaining, filtered) =
        filter_candidates(&tensor, &bank, 0, "yyyyy".parse()?)?;

    assert!(remaining.is_empty());
    assert_eq!(filtered.num_candidates(), 0);
    Ok(())
}

#[test]
fn filter_candidates_invalid_inputs() {
    let bank = WordBank::from_iterator(&WORDS);
    let tensor = ResultTensor::build(&bank, &bank);

    assert_matches!(
        filter_candidates(&tensor, &bank, bank.len(), FeedbackPattern::ALL_CORRECT),
        Err(WordleError::GuessIndexOutOfRange { index: 10, len: 10 })
    );
    assert_matches!(
        filter_candidates(&tensor, &bank[1..], 0, FeedbackPattern::ALL_CORRECT),
        Err(WordleError::ShapeMismatch {
            expected: 10,
            actual: 9
        })
    );
}
