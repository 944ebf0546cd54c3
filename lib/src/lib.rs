#![cfg_attr(feature = "unstable", feature(test))]

//! Solves Wordle puzzles by always making the guess that is expected to reveal the most
//! information about the objective word.
//!
//! The result of every allowed guess against every possible objective is computed once, up
//! front, in a [`ResultTensor`]. Each game then narrows that tensor down as results come in.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use wordle_entropy_solver::*;
//!
//! let possible_words = WordBank::from_iterator(&["hydro", "boxed", "allot", "excel"]);
//! let allowed_words = WordBank::from_iterator(&["hydro", "boxed", "allot", "excel", "lulls"]);
//! let tensor = ResultTensor::build(&possible_words, &allowed_words);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let comparison = compare_strategies(
//!     || WordleGame::new(possible_words.to_vec(), StdRng::seed_from_u64(7)),
//!     &tensor,
//!     &possible_words,
//!     &allowed_words,
//!     CompareOptions { trials: 5, secret: Some(Word::new("hydro")?) },
//!     &mut rng,
//! )?;
//!
//! let (_mean_random, mean_entropy) = comparison.means();
//! assert!(mean_entropy >= 1.0);
//! # Ok::<(), WordleError>(())
//! ```

mod data;
mod engine;
mod entropy;
mod game;
mod results;
mod tensor;

pub use data::*;
pub use engine::*;
pub use entropy::*;
pub use game::*;
pub use results::*;
pub use tensor::*;
