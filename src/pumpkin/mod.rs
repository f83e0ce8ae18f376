//! Hot-pumpkin elimination game
//!
//! Players numbered `1..=N` sit in a circle. Each round the group counts
//! off a fixed number of seats (the count-to value) starting from the seat
//! where the previous round ended; whoever the count lands on is eliminated
//! and the next round starts at the seat that player vacated. After `N - 1`
//! rounds one player remains, the winner.
//!
//! The simulator is fully deterministic, so the interesting questions run
//! backwards: given an observed elimination prefix (or a desired winner),
//! which count-to value was in play? [`search_for_elimination_sequence`] and
//! [`search_for_winner`] answer by scanning candidates from 1 upward, so the
//! returned value is always the smallest one consistent with the target.

mod circle;
mod game;
mod search;

pub use circle::{count_off, Circle, PlayerId};
pub use game::{simulate_game, simulate_game_with_history, GameOutcome};
pub use search::{search_for_elimination_sequence, search_for_winner};
