//! Brute-force searches over count-to values
//!
//! Both searches scan candidates 1, 2, 3, ... up to a caller-supplied
//! ceiling and return the first hit, so the result is always the smallest
//! count-to value consistent with the target. The sequence search stops
//! simulating a candidate at the first divergent elimination.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::SolverError;

use super::circle::{count_off, Circle, PlayerId};
use super::game::simulate_game;

/// Find the smallest count-to value whose game eliminates exactly
/// `expected` first, in order.
///
/// Only `expected.len()` rounds are simulated per candidate. An empty
/// target is matched vacuously by candidate 1.
pub fn search_for_elimination_sequence(
    n_players: u32,
    expected: &[PlayerId],
    max_count_to: u64,
) -> Result<u64, SolverError> {
    if n_players == 0 {
        return Err(SolverError::NoPlayers);
    }
    validate_targets(n_players, expected)?;

    for candidate in 1..=max_count_to {
        if matches_first_eliminations(n_players, candidate, expected) {
            debug!(count_to = candidate, "elimination prefix matched");
            return Ok(candidate);
        }
        if candidate % 100_000 == 0 {
            trace!(candidate, "no match yet");
        }
    }

    Err(SolverError::SearchExhausted {
        ceiling: max_count_to,
    })
}

/// Find the smallest count-to value whose game is won by `desired_winner`.
///
/// Every candidate's game is simulated to completion.
pub fn search_for_winner(
    n_players: u32,
    desired_winner: PlayerId,
    max_count_to: u64,
) -> Result<u64, SolverError> {
    if n_players == 0 {
        return Err(SolverError::NoPlayers);
    }
    if desired_winner > n_players {
        return Err(SolverError::WinnerOutOfRange {
            winner: desired_winner,
            n_players,
        });
    }

    for candidate in 1..=max_count_to {
        if simulate_game(n_players, candidate)? == desired_winner {
            debug!(count_to = candidate, "winner matched");
            return Ok(candidate);
        }
        if candidate % 100_000 == 0 {
            trace!(candidate, "no match yet");
        }
    }

    Err(SolverError::SearchExhausted {
        ceiling: max_count_to,
    })
}

/// Simulate `expected.len()` rounds and compare eliminations in order.
fn matches_first_eliminations(n_players: u32, count_to: u64, expected: &[PlayerId]) -> bool {
    let mut circle = Circle::new(n_players);
    let mut current = 0;

    for &want in expected {
        let (index, eliminated) = count_off(&circle, current, count_to);
        if eliminated != want {
            return false;
        }
        circle.remove(index);
        if circle.is_empty() {
            break;
        }
        current = index % circle.len();
    }

    true
}

/// Target ids must be members of the circle and pairwise distinct.
fn validate_targets(n_players: u32, expected: &[PlayerId]) -> Result<(), SolverError> {
    let mut seen = HashSet::with_capacity(expected.len());
    for &id in expected {
        if id == 0 || id > n_players {
            return Err(SolverError::TargetOutOfRange { id, n_players });
        }
        if !seen.insert(id) {
            return Err(SolverError::DuplicateTarget(id));
        }
    }
    Ok(())
}
