//! Game state and move legality.
//!
//! [`GameState::apply`] is the single entry point for advancing a game.
//! A move is validated against a hypothetical post-move board before the
//! live board is touched, so a rejected action leaves the state intact.

use std::collections::HashSet;
use std::fmt;

use crate::board::{Color, Grid};
use crate::constants::PASSES_TO_END;
use crate::group::remove_dead_groups;

/// An action a player can take on their turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Pass,
    /// Place a stone at `(row, col)`.
    Move(usize, usize),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Pass => write!(f, "pass"),
            Action::Move(row, col) => write!(f, "({row}, {col})"),
        }
    }
}

/// Why an action was rejected. The game state is left untouched in every
/// case.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The target intersection already holds a stone.
    OccupiedCell,
    /// The move would recreate a position seen earlier in the game.
    KoViolation,
    /// The game has already ended.
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OccupiedCell => write!(f, "illegal move: intersection is occupied"),
            MoveError::KoViolation => write!(f, "illegal move: repeats an earlier position"),
            MoveError::GameOver => write!(f, "game is over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Full state of one game: the live board, the player to move, the pass
/// count, and the set of every position seen so far.
pub struct GameState {
    board: Grid,
    turn: Color,
    passes: u32,
    history: HashSet<Grid>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Grid::new(),
            turn: Color::Black,
            passes: 0,
            history: HashSet::new(),
        }
    }

    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// The color whose turn it is.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// True once two passes have been played. The pass count is never
    /// reset by an intervening move, so the passes need not be
    /// consecutive.
    pub fn is_ended(&self) -> bool {
        self.passes >= PASSES_TO_END
    }

    /// Apply an action for the player to move.
    ///
    /// On success the board reflects all captures, the resulting position
    /// is recorded for superko checks, and the turn flips. On failure
    /// nothing changes.
    pub fn apply(&mut self, action: Action) -> Result<(), MoveError> {
        if self.is_ended() {
            return Err(MoveError::GameOver);
        }
        match action {
            Action::Pass => {
                self.passes += 1;
            }
            Action::Move(row, col) => {
                if self.board.is_occupied(row, col) {
                    return Err(MoveError::OccupiedCell);
                }
                if self.is_ko(row, col) {
                    return Err(MoveError::KoViolation);
                }
                self.board.set(row, col, Some(self.turn));
                // Opponent captures resolve before the mover's own group
                // is checked, so capturing into a surrounded point stays
                // legal.
                remove_dead_groups(&mut self.board, self.turn.opposite());
                remove_dead_groups(&mut self.board, self.turn);
            }
        }
        self.history.insert(self.board.clone());
        self.turn = self.turn.opposite();
        Ok(())
    }

    /// Would placing the current player's stone at `(row, col)` recreate
    /// a position seen earlier in the game?
    ///
    /// This is positional superko: any full-board repetition is
    /// forbidden, not only a retake of the immediately previous position.
    /// The check runs on a scratch clone; the live board is never
    /// touched. A placement that self-captures without capturing anything
    /// reproduces the pre-move position and is rejected here, which is
    /// what makes plain suicide illegal.
    pub fn is_ko(&self, row: usize, col: usize) -> bool {
        let mut hypothetical = self.board.clone();
        hypothetical.set(row, col, Some(self.turn));
        remove_dead_groups(&mut hypothetical, self.turn.opposite());
        remove_dead_groups(&mut hypothetical, self.turn);
        self.history.contains(&hypothetical)
    }

    /// Area scoring is not part of this engine.
    pub fn count_scores(&self) -> (usize, usize) {
        unimplemented!("scoring is not implemented")
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
