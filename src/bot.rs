//! Random decision policy.
//!
//! The policy consumes only the public query surface of the rules engine
//! (`empty_positions`, `is_ko`), the same way a scripted or human-driven
//! policy would.

use crate::board::Point;
use crate::game::{Action, GameState};

/// Pick a uniformly random legal move for the player to move, or pass
/// when no intersection is playable.
///
/// Candidates come from `empty_positions`, so occupancy never needs
/// rechecking; superko (and with it suicide) is filtered through
/// [`GameState::is_ko`].
pub fn random_action(state: &GameState) -> Action {
    let mut candidates: Vec<Point> = state.board().empty_positions().collect();
    fastrand::shuffle(&mut candidates);

    for (row, col) in candidates {
        if !state.is_ko(row, col) {
            return Action::Move(row, col);
        }
    }
    Action::Pass
}
