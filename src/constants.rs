//! Constants for board geometry and game limits.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side length. This engine plays the standard 19x19 game.
pub const N: usize = 19;

/// Number of intersections on the board.
pub const NUM_CELLS: usize = N * N;

// =============================================================================
// Game Limits
// =============================================================================

/// Number of passes after which the game is over.
pub const PASSES_TO_END: u32 = 2;

/// Self-play length guard (3 times board area to allow for captures and
/// replays).
pub const MAX_GAME_LEN: usize = N * N * 3;
