#[macro_use]
extern crate assert_matches;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wordle_entropy_solver::*;

use std::result::Result;

const WORDS: [&str; 12] = [
    "hydro", "boxed", "allot", "excel", "lulls", "crane", "slate", "drown", "proud", "hyena",
    "rhino", "cloud",
];

/// Records every guess it is given, on top of a regular game.
struct RecordingGame {
    game: WordleGame<StdRng>,
    guesses: Vec<(Word, FeedbackPattern, u32)>,
}

impl RecordingGame {
    fn new(words: &[Word]) -> RecordingGame {
        RecordingGame {
            game: WordleGame::new(words.to_vec(), StdRng::seed_from_u64(3)),
            guesses: Vec::new(),
        }
    }
}

impl GameSession for RecordingGame {
    fn start_game(&mut self, secret: Option<Word>, display: bool) -> Result<(), WordleError> {
        self.guesses.clear();
        self.game.start_game(secret, display)
    }

    fn make_guess(&mut self, guess: &Word) -> Result<(FeedbackPattern, u32), WordleError> {
        let (result, num_guesses) = self.game.make_guess(guess)?;
        self.guesses.push((*guess, result, num_guesses));
        Ok((result, num_guesses))
    }
}

fn secret(word: &str) -> GameOptions {
    GameOptions {
        secret: Some(Word::new(word).unwrap()),
        display: false,
    }
}

#[test]
fn play_game_entropy_solves_hydro() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(&WORDS);
    let tensor = ResultTensor::build(&bank, &bank);
    let mut game = RecordingGame::new(&bank);

    let outcome = play_game_entropy(&mut game, &tensor, &bank, &bank, secret("hydro"))?;

    assert_eq!(outcome.answer, "hydro");
    assert!(outcome.num_guesses as usize <= bank.len());
    assert_eq!(outcome.num_guesses as usize, outcome.guesses.len());
    assert_eq!(outcome.num_guesses as usize, game.guesses.len());
    let (last_guess, last_result, last_count) = game.guesses.last().unwrap();
    assert_eq!(*last_guess, "hydro");
    assert!(last_result.is_correct());
    assert_eq!(*last_count, outcome.num_guesses);
    Ok(())
}

#[test]
fn play_game_entropy_solves_every_word() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(&WORDS);
    let tensor = ResultTensor::build(&bank, &bank);
    let mut game = WordleGame::new(bank.to_vec(), StdRng::seed_from_u64(0));

    for word in bank.iter() {
        let options = GameOptions {
            secret: Some(*word),
            display: false,
        };
        let outcome = play_game_entropy(&mut game, &tensor, &bank, &bank, options)?;

        assert_eq!(outcome.answer, *word);
        assert_eq!(outcome.num_guesses, game.num_guesses());
        assert_eq!(outcome.guesses.last(), Some(word));
    }
    Ok(())
}

#[test]
fn play_game_entropy_skips_confirmation_after_correct_guess() -> Result<(), WordleError> {
    let candidates = WordBank::from_iterator(&["boxed", "hydro", "allot"]);
    let guesses = WordBank::from_iterator(&["boxed", "quick"]);
    let tensor = ResultTensor::build(&candidates, &guesses);
    let mut game = RecordingGame::new(&candidates);

    let outcome = play_game_entropy(&mut game, &tensor, &candidates, &guesses, secret("boxed"))?;

    assert_eq!(outcome.num_guesses, 1);
    assert_eq!(outcome.guesses, vec![Word::new("boxed")?]);

    let outcome = play_game_entropy(&mut game, &tensor, &candidates, &guesses, secret("hydro"))?;

    assert_eq!(outcome.num_guesses, 2);
    assert_eq!(
        outcome.guesses,
        vec![Word::new("boxed")?, Word::new("hydro")?]
    );
    assert_eq!(game.guesses.len(), 2);
    Ok(())
}

#[test]
fn play_game_with_single_candidate() -> Result<(), WordleError> {
    let candidates = WordBank::from_iterator(&["hydro"]);
    let guesses = WordBank::from_iterator(&WORDS);
    let tensor = ResultTensor::build(&candidates, &guesses);
    let mut game = RecordingGame::new(&candidates);
    let mut rng = StdRng::seed_from_u64(0);

    let random = play_game_random(
        &mut game,
        &tensor,
        &candidates,
        &guesses,
        secret("hydro"),
        &mut rng,
    )?;

    assert_eq!(random.num_guesses, 0);
    assert_eq!(random.answer, "hydro");
    assert!(game.guesses.is_empty());

    let entropy = play_game_entropy(&mut game, &tensor, &candidates, &guesses, secret("hydro"))?;

    assert_eq!(entropy.num_guesses, 1);
    assert_eq!(entropy.guesses, vec![Word::new("hydro")?]);
    Ok(())
}

#[test]
fn play_game_random_solves_hydro() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(&WORDS);
    let tensor = ResultTensor::build(&bank, &bank);
    let mut game = RecordingGame::new(&bank);
    let mut rng = StdRng::seed_from_u64(11);

    let outcome = play_game_random(&mut game, &tensor, &bank, &bank, secret("hydro"), &mut rng)?;

    assert_eq!(outcome.answer, "hydro");
    assert_eq!(outcome.num_guesses as usize, outcome.guesses.len());
    assert_eq!(outcome.num_guesses as usize, game.guesses.len());
    let submitted: Vec<Word> = game.guesses.iter().map(|(guess, _, _)| *guess).collect();
    assert_eq!(submitted, outcome.guesses);
    Ok(())
}

#[test]
fn play_game_random_is_reproducible() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(&WORDS);
    let tensor = ResultTensor::build(&bank, &bank);
    let mut game = WordleGame::new(bank.to_vec(), StdRng::seed_from_u64(0));

    let first = play_game_random(
        &mut game,
        &tensor,
        &bank,
        &bank,
        secret("cloud"),
        &mut StdRng::seed_from_u64(5),
    )?;
    let second = play_game_random(
        &mut game,
        &tensor,
        &bank,
        &bank,
        secret("cloud"),
        &mut StdRng::seed_from_u64(5),
    )?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn play_game_with_unknown_secret() {
    let candidates = WordBank::from_iterator(&["boxed", "allot"]);
    let guesses = WordBank::from_iterator(&["boxed", "allot", "hydro"]);
    let tensor = ResultTensor::build(&candidates, &guesses);
    let mut game = RecordingGame::new(&candidates);

    assert_matches!(
        play_game_entropy(&mut game, &tensor, &candidates, &guesses, secret("hydro")),
        Err(WordleError::InvalidResults)
    );
}

#[test]
fn play_game_with_indistinguishable_candidates() {
    let candidates = WordBank::from_iterator(&["boxed", "hydro"]);
    let guesses = WordBank::from_iterator(&["quick"]);
    let tensor = ResultTensor::build(&candidates, &guesses);
    let mut game = RecordingGame::new(&candidates);

    assert_matches!(
        play_game_entropy(&mut game, &tensor, &candidates, &guesses, secret("hydro")),
        Err(WordleError::Indistinguishable(2))
    );
    assert_matches!(
        play_game_random(
            &mut game,
            &tensor,
            &candidates,
            &guesses,
            secret("hydro"),
            &mut StdRng::seed_from_u64(0)
        ),
        Err(WordleError::Indistinguishable(2))
    );
}

#[test]
fn play_game_with_invalid_inputs() {
    let bank = WordBank::from_iterator(&WORDS);
    let tensor = ResultTensor::build(&bank, &bank);
    let mut game = RecordingGame::new(&bank);

    assert_matches!(
        play_game_entropy(&mut game, &tensor, &[], &bank, secret("hydro")),
        Err(WordleError::NoCandidates)
    );
    assert_matches!(
        play_game_entropy(&mut game, &tensor, &bank, &[], secret("hydro")),
        Err(WordleError::NoGuesses)
    );
    assert_matches!(
        play_game_entropy(&mut game, &tensor, &bank, &bank[..4], secret("hydro")),
        Err(WordleError::ShapeMismatch {
            expected: 12,
            actual: 4
        })
    );
}

#[test]
fn play_game_with_custom_selector() -> Result<(), WordleError> {
    struct FirstGuessSelector;

    impl GuessSelector for FirstGuessSelector {
        fn select_guess(
            &mut self,
            _tensor: &ResultTensor,
            _guesses: &[Word],
        ) -> Result<usize, WordleError> {
            Ok(0)
        }
    }

    let candidates = WordBank::from_iterator(&["boxed", "hydro", "allot"]);
    let guesses = WordBank::from_iterator(&["boxed", "quick"]);
    let tensor = ResultTensor::build(&candidates, &guesses);
    let mut game = RecordingGame::new(&candidates);

    let outcome = play_game_with_selector(
        &mut game,
        &tensor,
        &candidates,
        &guesses,
        secret("allot"),
        &mut FirstGuessSelector,
    )?;

    assert_eq!(outcome.answer, "allot");
    assert_eq!(outcome.num_guesses, 1);
    Ok(())
}

#[test]
fn compare_strategies_is_reproducible() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(&WORDS);
    let tensor = ResultTensor::build(&bank, &bank);
    let options = CompareOptions {
        trials: 1,
        secret: Some(Word::new("hydro")?),
    };
    let new_game = || WordleGame::new(bank.to_vec(), StdRng::seed_from_u64(0));

    let first = compare_strategies(
        new_game,
        &tensor,
        &bank,
        &bank,
        options,
        &mut StdRng::seed_from_u64(9),
    )?;
    let second = compare_strategies(
        new_game,
        &tensor,
        &bank,
        &bank,
        options,
        &mut StdRng::seed_from_u64(9),
    )?;
    let other_seed = compare_strategies(
        new_game,
        &tensor,
        &bank,
        &bank,
        options,
        &mut StdRng::seed_from_u64(10),
    )?;

    assert_eq!(first, second);
    assert_eq!(first.entropy, other_seed.entropy);
    assert_eq!(first.random.num_games, 1);
    assert_eq!(first.entropy.std_dev, 0.0);
    Ok(())
}

#[test]
fn compare_strategies_matches_single_games() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(&WORDS);
    let tensor = ResultTensor::build(&bank, &bank);
    let mut game = WordleGame::new(bank.to_vec(), StdRng::seed_from_u64(0));
    let expected = play_game_entropy(&mut game, &tensor, &bank, &bank, secret("slate"))?;

    let comparison = compare_strategies(
        || WordleGame::new(bank.to_vec(), StdRng::seed_from_u64(0)),
        &tensor,
        &bank,
        &bank,
        CompareOptions {
            trials: 4,
            secret: Some(Word::new("slate")?),
        },
        &mut StdRng::seed_from_u64(1),
    )?;

    let (mean_random, mean_entropy) = comparison.means();
    assert_eq!(mean_entropy, expected.num_guesses as f64);
    assert!(mean_random >= 1.0);
    assert_eq!(comparison.random.num_games, 4);
    assert_eq!(comparison.entropy.num_games_per_num_guesses.len(), 1);
    Ok(())
}

#[test]
fn compare_strategies_with_random_secrets() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(&WORDS);
    let tensor = ResultTensor::build(&bank, &bank);
    let mut seed = 0;

    let comparison = compare_strategies(
        || {
            seed += 1;
            WordleGame::new(bank.to_vec(), StdRng::seed_from_u64(seed))
        },
        &tensor,
        &bank,
        &bank,
        CompareOptions::default(),
        &mut StdRng::seed_from_u64(1),
    )?;

    assert_eq!(comparison.random.num_games, 20);
    assert_eq!(comparison.entropy.num_games, 20);
    assert!(comparison.entropy.mean >= 1.0);
    Ok(())
}

#[test]
fn compare_strategies_without_trials() {
    let bank = WordBank::from_iterator(&WORDS);
    let tensor = ResultTensor::build(&bank, &bank);

    assert_matches!(
        compare_strategies(
            || WordleGame::new(bank.to_vec(), StdRng::seed_from_u64(0)),
            &tensor,
            &bank,
            &bank,
            CompareOptions {
                trials: 0,
                secret: None
            },
            &mut StdRng::seed_from_u64(1),
        ),
        Err(WordleError::NoTrials)
    );
}

#[test]
fn guess_stats_from_counts() {
    let stats = GuessStats::from_counts(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();

    assert_eq!(stats.num_games, 8);
    assert_eq!(stats.mean, 5.0);
    assert_eq!(stats.std_dev, 2.0);
    assert_eq!(
        stats.num_games_per_num_guesses.into_iter().collect::<Vec<_>>(),
        vec![(2, 1), (4, 3), (5, 2), (7, 1), (9, 1)]
    );
    assert_eq!(GuessStats::from_counts(&[]), None);
}
