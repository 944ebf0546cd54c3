use crate::data::Word;
use crate::results::get_result_for_guess;
use crate::results::FeedbackPattern;
use crate::results::WordleError;
use rand::seq::SliceRandom;
use rand::Rng;

/// A single game of Wordle, which knows the objective word and answers guesses.
///
/// The solvers in this crate only ever learn about the objective through this trait.
pub trait GameSession {
    /// Starts a new game, forgetting any previous guesses.
    ///
    /// If `secret` is `None`, the session chooses the objective word itself. If `display` is
    /// `true`, the session shows each guess as it is made.
    fn start_game(&mut self, secret: Option<Word>, display: bool) -> Result<(), WordleError>;

    /// Submits a guess. Returns the result of the guess and the number of guesses made so far in
    /// this game, including this one.
    fn make_guess(&mut self, guess: &Word) -> Result<(FeedbackPattern, u32), WordleError>;
}

/// A [`GameSession`] that picks its objective words at random from a fixed list.
pub struct WordleGame<R: Rng> {
    possible_words: Vec<Word>,
    rng: R,
    secret: Option<Word>,
    num_guesses: u32,
    display: bool,
}

impl<R: Rng> WordleGame<R> {
    /// Creates a game that draws objective words from `possible_words` using `rng`.
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use wordle_entropy_solver::*;
    ///
    /// let bank = WordBank::from_iterator(&["hydro", "boxed"]);
    /// let mut game = WordleGame::new(bank.to_vec(), StdRng::seed_from_u64(1));
    ///
    /// game.start_game(Some(Word::new("hydro")?), false)?;
    /// let (result, num_guesses) = game.make_guess(&Word::new("hydro")?)?;
    ///
    /// assert!(result.is_correct());
    /// assert_eq!(num_guesses, 1);
    /// # Ok::<(), WordleError>(())
    /// ```
    pub fn new(possible_words: Vec<Word>, rng: R) -> WordleGame<R> {
        WordleGame {
            possible_words,
            rng,
            secret: None,
            num_guesses: 0,
            display: false,
        }
    }

    /// The objective word of the current game, if one has been started.
    pub fn secret(&self) -> Option<Word> {
        self.secret
    }

    pub fn num_guesses(&self) -> u32 {
        self.num_guesses
    }
}

impl<R: Rng> GameSession for WordleGame<R> {
    fn start_game(&mut self, secret: Option<Word>, display: bool) -> Result<(), WordleError> {
        let secret = match secret {
            Some(secret) => secret,
            None => *self
                .possible_words
                .choose(&mut self.rng)
                .ok_or(WordleError::NoCandidates)?,
        };
        self.secret = Some(secret);
        self.num_guesses = 0;
        self.display = display;
        if display {
            println!("Starting a new game.");
        }
        Ok(())
    }

    fn make_guess(&mut self, guess: &Word) -> Result<(FeedbackPattern, u32), WordleError> {
        let secret = self.secret.ok_or(WordleError::GameNotStarted)?;
        let result = get_result_for_guess(&secret, guess);
        self.num_guesses += 1;
        if self.display {
            println!("{:>3}. {} {}", self.num_guesses, guess, result);
        }
        Ok((result, self.num_guesses))
    }
}
