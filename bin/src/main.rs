use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fs::File;
use std::io;
use std::time::Instant;
use wordle_entropy_solver::*;

/// Plays Wordle against itself, guessing either at random or by maximizing the expected
/// information of each guess.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible secret words, with one word on each line.
    #[arg(short = 'f', long)]
    words_file: String,

    /// Path to a file that contains the allowed guesses, with one word on each line. Defaults to
    /// the words file.
    #[arg(short = 'a', long)]
    allowed_file: Option<String>,

    /// Seeds every random choice, so that runs can be reproduced.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare the random and maximum-entropy strategies over several games.
    Compare {
        /// How many games to play with each strategy.
        #[arg(short, long, default_value_t = 20)]
        trials: u32,
        /// Use this secret word for every game, instead of picking one at random.
        #[arg(short, long)]
        word: Option<String>,
    },
    /// Run a single game with the given word.
    Single {
        word: String,
        #[arg(short, long, value_enum, default_value_t = Strategy::Entropy)]
        strategy: Strategy,
        /// Print each guess as it is made.
        #[arg(short, long)]
        display: bool,
    },
    /// Show the best opening guesses.
    Suggest {
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,
    },
    /// Benchmark the maximum-entropy strategy against every word in the words file.
    Benchmark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Random,
    Entropy,
}

/// The word lists and their precomputed results, shared by every game.
struct Solver {
    possible_words: WordBank,
    allowed_words: WordBank,
    tensor: ResultTensor,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();
    println!("File: {}", args.words_file);

    let possible_words = read_word_bank(&args.words_file)?;
    let allowed_words = match &args.allowed_file {
        Some(allowed_file) => read_word_bank(allowed_file)?,
        None => possible_words.clone(),
    };
    println!(
        "There are {} possible words and {} allowed guesses.",
        possible_words.len(),
        allowed_words.len()
    );

    let tensor = ResultTensor::build(&possible_words, &allowed_words);
    log::info!(
        "Precomputed results in {:.3}s",
        start_time.elapsed().as_secs_f64()
    );
    let solver = Solver {
        possible_words,
        allowed_words,
        tensor,
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match args.command {
        Command::Compare { trials, word } => {
            let secret = word.as_deref().map(Word::new).transpose()?;
            run_comparison(&solver, CompareOptions { trials, secret }, &mut rng)?
        }
        Command::Single {
            word,
            strategy,
            display,
        } => play_single_game(&solver, Word::new(&word)?, strategy, display, &mut rng)?,
        Command::Suggest { top } => suggest_guesses(&solver, top)?,
        Command::Benchmark => run_benchmark(&solver, &mut rng)?,
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn read_word_bank(path: &str) -> Result<WordBank, WordleError> {
    let reader = io::BufReader::new(File::open(path)?);
    WordBank::from_reader(reader)
}

fn run_comparison(
    solver: &Solver,
    options: CompareOptions,
    rng: &mut StdRng,
) -> Result<(), WordleError> {
    let mut game_seeds = StdRng::seed_from_u64(rng.gen());
    let comparison = compare_strategies(
        || {
            WordleGame::new(
                solver.possible_words.to_vec(),
                StdRng::seed_from_u64(game_seeds.gen()),
            )
        },
        &solver.tensor,
        &solver.possible_words,
        &solver.allowed_words,
        options,
        rng,
    )?;

    println!("Played {} games with each strategy.", options.trials);
    println!("|Strategy|Average guesses|");
    println!("|--------|---------------|");
    print_stats_row("Random", &comparison.random);
    print_stats_row("Entropy", &comparison.entropy);
    Ok(())
}

fn print_stats_row(name: &str, stats: &GuessStats) {
    println!("|{}|{:.2} +/- {:.2}|", name, stats.mean, stats.std_dev);
}

fn play_single_game(
    solver: &Solver,
    word: Word,
    strategy: Strategy,
    display: bool,
    rng: &mut StdRng,
) -> Result<(), WordleError> {
    let mut game = WordleGame::new(
        solver.possible_words.to_vec(),
        StdRng::seed_from_u64(rng.gen()),
    );
    let options = GameOptions {
        secret: Some(word),
        display,
    };
    let outcome = match strategy {
        Strategy::Random => play_game_random(
            &mut game,
            &solver.tensor,
            &solver.possible_words,
            &solver.allowed_words,
            options,
            rng,
        )?,
        Strategy::Entropy => play_game_entropy(
            &mut game,
            &solver.tensor,
            &solver.possible_words,
            &solver.allowed_words,
            options,
        )?,
    };

    println!(
        "Solved it! The word is {}. It took me {} guesses.",
        outcome.answer, outcome.num_guesses
    );
    for guess in outcome.guesses.iter() {
        println!("\t{}", guess);
    }
    Ok(())
}

fn suggest_guesses(solver: &Solver, top: usize) -> Result<(), WordleError> {
    let guesses = select_top_n_guesses(&solver.tensor, &solver.allowed_words, top)?;
    println!("|Guess|Entropy (bits)|");
    println!("|-----|--------------|");
    for guess in guesses {
        println!("|{}|{:.3}|", guess.word, guess.entropy);
    }
    Ok(())
}

fn run_benchmark(solver: &Solver, rng: &mut StdRng) -> Result<(), WordleError> {
    let mut game = WordleGame::new(
        solver.possible_words.to_vec(),
        StdRng::seed_from_u64(rng.gen()),
    );
    let mut num_guesses_per_game: Vec<u32> = Vec::with_capacity(solver.possible_words.len());
    for word in solver.possible_words.iter() {
        let options = GameOptions {
            secret: Some(*word),
            display: false,
        };
        let outcome = play_game_entropy(
            &mut game,
            &solver.tensor,
            &solver.possible_words,
            &solver.allowed_words,
            options,
        )?;
        num_guesses_per_game.push(outcome.num_guesses);
    }
    let stats =
        GuessStats::from_counts(&num_guesses_per_game).ok_or(WordleError::NoCandidates)?;
    println!("Solved {} words. Results:", stats.num_games);

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    for (num_guesses, num_games) in stats.num_games_per_num_guesses.iter() {
        println!("|{}|{}|", num_guesses, num_games);
    }

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        stats.mean, stats.std_dev
    );
    Ok(())
}
