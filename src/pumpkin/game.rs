//! Full-game simulator
//!
//! Plays the elimination game to completion: `N - 1` rounds, one removal
//! per round, the next round starting at the seat the victim vacated.

use crate::SolverError;

use super::circle::{count_off, Circle, PlayerId};

/// Outcome of a completed game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameOutcome {
    /// The last player left seated.
    pub winner: PlayerId,
    /// Every eliminated player, in elimination order.
    pub eliminations: Vec<PlayerId>,
}

/// Play a full game and report the winner.
///
/// The count starts at seat 0 (the group's leader). A one-player game is
/// legal and returns player 1 without running a round.
pub fn simulate_game(n_players: u32, count_to: u64) -> Result<PlayerId, SolverError> {
    let mut circle = new_game(n_players, count_to)?;
    let mut current = 0;

    while circle.len() > 1 {
        let (index, _) = count_off(&circle, current, count_to);
        circle.remove(index);
        current = index % circle.len();
    }

    Ok(circle.players()[0])
}

/// Play a full game and report the winner along with the elimination order.
pub fn simulate_game_with_history(
    n_players: u32,
    count_to: u64,
) -> Result<GameOutcome, SolverError> {
    let mut circle = new_game(n_players, count_to)?;
    let mut current = 0;
    let mut eliminations = Vec::with_capacity(n_players as usize - 1);

    while circle.len() > 1 {
        let (index, eliminated) = count_off(&circle, current, count_to);
        circle.remove(index);
        eliminations.push(eliminated);
        current = index % circle.len();
    }

    Ok(GameOutcome {
        winner: circle.players()[0],
        eliminations,
    })
}

fn new_game(n_players: u32, count_to: u64) -> Result<Circle, SolverError> {
    if n_players == 0 {
        return Err(SolverError::NoPlayers);
    }
    if count_to == 0 {
        return Err(SolverError::ZeroCountTo);
    }
    Ok(Circle::new(n_players))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_off_by_two_among_five() {
        let outcome = simulate_game_with_history(5, 2).unwrap();
        assert_eq!(outcome.eliminations, vec![2, 4, 1, 5]);
        assert_eq!(outcome.winner, 3);
    }

    #[test]
    fn winner_matches_history_winner() {
        let winner = simulate_game(7, 3).unwrap();
        let outcome = simulate_game_with_history(7, 3).unwrap();
        assert_eq!(winner, outcome.winner);
        assert_eq!(outcome.eliminations.len(), 6);
    }

    #[test]
    fn count_of_one_eliminates_in_seat_order() {
        let outcome = simulate_game_with_history(4, 1).unwrap();
        assert_eq!(outcome.eliminations, vec![1, 2, 3]);
        assert_eq!(outcome.winner, 4);
    }

    #[test]
    fn one_player_game_has_no_rounds() {
        let outcome = simulate_game_with_history(1, 10).unwrap();
        assert_eq!(outcome.winner, 1);
        assert!(outcome.eliminations.is_empty());
    }

    #[test]
    fn zero_players_is_rejected() {
        assert_eq!(simulate_game(0, 3), Err(SolverError::NoPlayers));
    }

    #[test]
    fn zero_count_is_rejected() {
        assert_eq!(simulate_game(5, 0), Err(SolverError::ZeroCountTo));
    }
}
