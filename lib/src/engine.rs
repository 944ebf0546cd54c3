use crate::data::Word;
use crate::entropy::select_max_entropy_guess;
use crate::game::GameSession;
use crate::results::FeedbackPattern;
use crate::results::WordleError;
use crate::tensor::filter_candidates;
use crate::tensor::ResultTensor;
use rand::Rng;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Chooses the next guess to make, given the results of the allowed guesses against the words
/// that are still possible.
pub trait GuessSelector {
    /// Returns the index of the next guess in `guesses`. The tensor has one row per entry in
    /// `guesses`, and one column per remaining candidate.
    fn select_guess(&mut self, tensor: &ResultTensor, guesses: &[Word])
        -> Result<usize, WordleError>;
}

/// Guesses uniformly at random from all the allowed guesses.
pub struct RandomSelector<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RandomSelector<'a, R> {
    pub fn new(rng: &'a mut R) -> RandomSelector<'a, R> {
        RandomSelector { rng }
    }
}

impl<R: Rng + ?Sized> GuessSelector for RandomSelector<'_, R> {
    fn select_guess(
        &mut self,
        _tensor: &ResultTensor,
        guesses: &[Word],
    ) -> Result<usize, WordleError> {
        if guesses.is_empty() {
            return Err(WordleError::NoGuesses);
        }
        Ok(self.rng.gen_range(0..guesses.len()))
    }
}

/// Guesses the word that is expected to reveal the most information about the remaining
/// candidates. See [`select_max_entropy_guess`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxEntropySelector;

impl GuessSelector for MaxEntropySelector {
    fn select_guess(
        &mut self,
        tensor: &ResultTensor,
        guesses: &[Word],
    ) -> Result<usize, WordleError> {
        select_max_entropy_guess(tensor, guesses).map(|(_, index)| index)
    }
}

/// How to start each game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameOptions {
    /// The objective word. If `None`, the [`GameSession`] chooses one.
    pub secret: Option<Word>,
    /// Whether the [`GameSession`] should display each guess.
    pub display: bool,
}

/// The result of playing a single game until only one candidate remained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    /// The number of guesses counted by the game session.
    pub num_guesses: u32,
    /// The only remaining candidate.
    pub answer: Word,
    /// Every guess that was submitted, in order.
    pub guesses: Vec<Word>,
}

struct NarrowedGame {
    outcome: GameOutcome,
    last_result: Option<FeedbackPattern>,
}

/// Plays a game by repeatedly asking `selector` for a guess, submitting it to `game`, and
/// filtering the candidates by the result, until exactly one candidate remains.
///
/// The remaining candidate is not submitted as a guess, so the returned count only includes the
/// guesses needed to identify the answer. If `possible_words` has a single word, no guesses are
/// made at all.
///
/// `tensor` must have been built from `possible_words` and `allowed_words`. It is not modified;
/// each game works on its own filtered copies.
pub fn play_game_with_selector<G, S>(
    game: &mut G,
    tensor: &ResultTensor,
    possible_words: &[Word],
    allowed_words: &[Word],
    options: GameOptions,
    selector: &mut S,
) -> Result<GameOutcome, WordleError>
where
    G: GameSession + ?Sized,
    S: GuessSelector + ?Sized,
{
    narrow_to_one_candidate(
        game,
        tensor,
        possible_words,
        allowed_words,
        options,
        selector,
    )
    .map(|narrowed| narrowed.outcome)
}

/// Plays a game by guessing at random until only one candidate remains.
///
/// Returns the number of guesses reported by the last submission. The final answer is identified
/// but never submitted.
pub fn play_game_random<G, R>(
    game: &mut G,
    tensor: &ResultTensor,
    possible_words: &[Word],
    allowed_words: &[Word],
    options: GameOptions,
    rng: &mut R,
) -> Result<GameOutcome, WordleError>
where
    G: GameSession + ?Sized,
    R: Rng + ?Sized,
{
    play_game_with_selector(
        game,
        tensor,
        possible_words,
        allowed_words,
        options,
        &mut RandomSelector::new(rng),
    )
}

/// Plays a game by always making the maximum-entropy guess.
///
/// Once only one candidate remains, it is submitted to the game as a final guess, unless the
/// previous guess was already correct. The returned count therefore includes the winning guess,
/// and always matches the count reported by `game`.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use wordle_entropy_solver::*;
///
/// let bank = WordBank::from_iterator(&["hydro", "boxed", "allot", "excel", "lulls"]);
/// let tensor = ResultTensor::build(&bank, &bank);
/// let mut game = WordleGame::new(bank.to_vec(), StdRng::seed_from_u64(1));
/// let options = GameOptions { secret: Some(Word::new("hydro")?), display: false };
///
/// let outcome = play_game_entropy(&mut game, &tensor, &bank, &bank, options)?;
///
/// assert_eq!(outcome.answer, "hydro");
/// assert_eq!(outcome.guesses.last(), Some(&outcome.answer));
/// # Ok::<(), WordleError>(())
/// ```
pub fn play_game_entropy<G>(
    game: &mut G,
    tensor: &ResultTensor,
    possible_words: &[Word],
    allowed_words: &[Word],
    options: GameOptions,
) -> Result<GameOutcome, WordleError>
where
    G: GameSession + ?Sized,
{
    let NarrowedGame {
        mut outcome,
        last_result,
    } = narrow_to_one_candidate(
        game,
        tensor,
        possible_words,
        allowed_words,
        options,
        &mut MaxEntropySelector,
    )?;
    if last_result.map_or(false, |result| result.is_correct()) {
        return Ok(outcome);
    }

    let (result, num_guesses) = game.make_guess(&outcome.answer)?;
    log::debug!("Confirming guess {}: {}", outcome.answer, result);
    if !result.is_correct() {
        return Err(WordleError::InvalidResults);
    }
    outcome.guesses.push(outcome.answer);
    outcome.num_guesses = num_guesses;
    Ok(outcome)
}

fn narrow_to_one_candidate<G, S>(
    game: &mut G,
    tensor: &ResultTensor,
    possible_words: &[Word],
    allowed_words: &[Word],
    options: GameOptions,
    selector: &mut S,
) -> Result<NarrowedGame, WordleError>
where
    G: GameSession + ?Sized,
    S: GuessSelector + ?Sized,
{
    if possible_words.is_empty() {
        return Err(WordleError::NoCandidates);
    }
    if allowed_words.is_empty() {
        return Err(WordleError::NoGuesses);
    }
    if tensor.num_guesses() != allowed_words.len() {
        return Err(WordleError::ShapeMismatch {
            expected: tensor.num_guesses(),
            actual: allowed_words.len(),
        });
    }

    game.start_game(options.secret, options.display)?;

    let mut candidates: Vec<Word> = possible_words.to_vec();
    let mut tensor: Cow<ResultTensor> = Cow::Borrowed(tensor);
    let mut guesses: Vec<Word> = Vec::new();
    let mut num_guesses = 0;
    let mut last_result = None;

    while candidates.len() > 1 {
        let guess_index = selector.select_guess(&tensor, allowed_words)?;
        let guess = *allowed_words
            .get(guess_index)
            .ok_or(WordleError::GuessIndexOutOfRange {
                index: guess_index,
                len: allowed_words.len(),
            })?;
        let (result, count) = game.make_guess(&guess)?;
        let (remaining, narrowed) = filter_candidates(&tensor, &candidates, guess_index, result)?;
        log::debug!(
            "Guess {} ({}): {} -> {} candidates remain",
            count,
            guess,
            result,
            remaining.len()
        );

        if remaining.is_empty() {
            return Err(WordleError::InvalidResults);
        }
        if remaining.len() == candidates.len() && !narrowed.can_distinguish_candidates() {
            return Err(WordleError::Indistinguishable(remaining.len()));
        }

        guesses.push(guess);
        num_guesses = count;
        last_result = Some(result);
        candidates = remaining;
        tensor = Cow::Owned(narrowed);
    }

    Ok(NarrowedGame {
        outcome: GameOutcome {
            num_guesses,
            answer: candidates[0],
            guesses,
        },
        last_result,
    })
}

/// Summary statistics of the number of guesses needed across several games.
#[derive(Clone, Debug, PartialEq)]
pub struct GuessStats {
    pub num_games: usize,
    pub mean: f64,
    /// The population standard deviation.
    pub std_dev: f64,
    /// Maps the number of guesses to the number of games that needed that many guesses.
    pub num_games_per_num_guesses: BTreeMap<u32, u32>,
}

impl GuessStats {
    /// Computes statistics for the given per-game guess counts. Returns `None` if there are no
    /// games.
    ///
    /// ```
    /// use wordle_entropy_solver::GuessStats;
    ///
    /// let stats = GuessStats::from_counts(&[3, 4, 4, 5]).unwrap();
    ///
    /// assert_eq!(stats.mean, 4.0);
    /// assert_eq!(stats.num_games_per_num_guesses.get(&4), Some(&2));
    /// ```
    pub fn from_counts(num_guesses_per_game: &[u32]) -> Option<GuessStats> {
        if num_guesses_per_game.is_empty() {
            return None;
        }
        let num_games = num_guesses_per_game.len();
        let mean = num_guesses_per_game
            .iter()
            .map(|num_guesses| *num_guesses as f64)
            .sum::<f64>()
            / num_games as f64;
        let std_dev = (num_guesses_per_game
            .iter()
            .map(|num_guesses| (*num_guesses as f64 - mean).powi(2))
            .sum::<f64>()
            / num_games as f64)
            .sqrt();
        let mut num_games_per_num_guesses = BTreeMap::new();
        for num_guesses in num_guesses_per_game {
            *num_games_per_num_guesses.entry(*num_guesses).or_insert(0) += 1;
        }
        Some(GuessStats {
            num_games,
            mean,
            std_dev,
            num_games_per_num_guesses,
        })
    }
}

/// How to run a comparison between the random and the maximum-entropy strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompareOptions {
    /// The number of games to play with each strategy.
    pub trials: u32,
    /// The objective word for every game. If `None`, each game chooses its own.
    pub secret: Option<Word>,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            trials: 20,
            secret: None,
        }
    }
}

/// The results of [`compare_strategies`].
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub random: GuessStats,
    pub entropy: GuessStats,
}

impl Comparison {
    /// The mean number of guesses needed by the random and the entropy strategies, respectively.
    pub fn means(&self) -> (f64, f64) {
        (self.random.mean, self.entropy.mean)
    }
}

/// Plays `options.trials` games with each of the random and the maximum-entropy strategies, and
/// reports how many guesses each needed.
///
/// Every game is played on a fresh session from `new_game`. The random strategy draws its
/// guesses from `rng`, so comparisons are reproducible when `rng` is seeded.
pub fn compare_strategies<G, F, R>(
    mut new_game: F,
    tensor: &ResultTensor,
    possible_words: &[Word],
    allowed_words: &[Word],
    options: CompareOptions,
    rng: &mut R,
) -> Result<Comparison, WordleError>
where
    G: GameSession,
    F: FnMut() -> G,
    R: Rng + ?Sized,
{
    if options.trials == 0 {
        return Err(WordleError::NoTrials);
    }
    let game_options = GameOptions {
        secret: options.secret,
        display: false,
    };
    let mut random_counts = Vec::with_capacity(options.trials as usize);
    let mut entropy_counts = Vec::with_capacity(options.trials as usize);
    for trial in 1..=options.trials {
        let random = play_game_random(
            &mut new_game(),
            tensor,
            possible_words,
            allowed_words,
            game_options,
            &mut *rng,
        )?;
        let entropy = play_game_entropy(
            &mut new_game(),
            tensor,
            possible_words,
            allowed_words,
            game_options,
        )?;
        log::debug!(
            "Trial {}: random needed {} guesses, entropy needed {}",
            trial,
            random.num_guesses,
            entropy.num_guesses
        );
        random_counts.push(random.num_guesses);
        entropy_counts.push(entropy.num_guesses);
    }

    let comparison = Comparison {
        random: GuessStats::from_counts(&random_counts).ok_or(WordleError::NoTrials)?,
        entropy: GuessStats::from_counts(&entropy_counts).ok_or(WordleError::NoTrials)?,
    };
    log::info!(
        "Compared {} trials: random {:.2} guesses, entropy {:.2} guesses",
        options.trials,
        comparison.random.mean,
        comparison.entropy.mean
    );
    Ok(comparison)
}
