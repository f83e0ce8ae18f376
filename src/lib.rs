//! # Riddler puzzle solvers
//!
//! Solvers for three recreational-math riddles, each a standalone module
//! answering a single numeric question:
//!
//! 1. **Hot pumpkin** ([`pumpkin`]): a counting-off elimination game played
//!    in a circle. A deterministic simulator plays the game for a given
//!    count-to value, and brute-force searches recover the smallest count-to
//!    value consistent with an observed elimination prefix or a desired
//!    winner.
//! 2. **Sliced ruler** ([`ruler`]): the expected length of the piece
//!    containing a marked point after cutting a ruler at uniformly random
//!    positions, estimated by Monte Carlo.
//! 3. **Summit race** ([`race`]): a lone rider's expected mountain points
//!    against a pair of drafting teammates, estimated by Monte Carlo.
//!
//! The simulators are pure functions of their inputs. The Monte Carlo
//! estimators never touch ambient randomness: every sampling function takes
//! a caller-supplied [`rand::Rng`], so a seeded generator reproduces a run
//! exactly.
//!
//! ## Usage Example
//!
//! ```
//! use riddler::pumpkin::{search_for_elimination_sequence, simulate_game};
//!
//! // Smallest count-to value that eliminates players 19, 51, 52 first
//! // in a 61-player game.
//! let count_to = search_for_elimination_sequence(61, &[19, 51, 52], 1_000_000)?;
//! assert_eq!(count_to, 136_232);
//! assert_eq!(simulate_game(61, count_to)?, 58);
//! # Ok::<(), riddler::SolverError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// One module per riddle - the solvers share nothing but the error type
pub mod pumpkin; // elimination-game simulator and searches
pub mod race;    // summit-race expectation
pub mod ruler;   // sliced-ruler expectation

// Re-exports for convenience
pub use pumpkin::{
    search_for_elimination_sequence, search_for_winner, simulate_game,
    simulate_game_with_history, Circle, GameOutcome, PlayerId,
};

use thiserror::Error;

/// Errors reported by the puzzle solvers
///
/// All failures are terminal: the caller adjusts the inputs (e.g. raises a
/// search ceiling) and re-invokes. No partial results are returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A game was requested with no players in the circle
    #[error("a game needs at least one player")]
    NoPlayers,

    /// A count-to value of zero was supplied
    #[error("count-to must be a positive integer")]
    ZeroCountTo,

    /// An expected elimination target is not a member of the circle
    #[error("target id {id} is outside the circle of {n_players} players")]
    TargetOutOfRange {
        /// The offending identifier
        id: PlayerId,
        /// Number of players in the game being searched
        n_players: u32,
    },

    /// An expected elimination target appears more than once
    #[error("target id {0} is listed more than once")]
    DuplicateTarget(PlayerId),

    /// The desired winner is not a member of the circle
    #[error("desired winner {winner} cannot exceed the player count {n_players}")]
    WinnerOutOfRange {
        /// The requested winner
        winner: PlayerId,
        /// Number of players in the game being searched
        n_players: u32,
    },

    /// No candidate count-to value within the ceiling matched the target
    #[error("no count-to value in 1..={ceiling} produces the requested outcome")]
    SearchExhausted {
        /// The upper bound that was scanned without a match
        ceiling: u64,
    },
}
