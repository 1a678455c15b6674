//! A rules engine for the game of Go on a 19x19 board.
//!
//! The crate implements board representation, chain (group) detection,
//! liberty counting, capture resolution, and positional-superko
//! detection. Scoring, time controls, and graphical rendering are out of
//! scope; the engine exposes query operations (`stones`,
//! `empty_positions`, `groups_of`, `is_ko`) for renderers and decision
//! policies to build on.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and game limits
//! - [`board`] - Colors, stones, and the occupancy grid
//! - [`group`] - Chain discovery and capture resolution
//! - [`game`] - Game state, legality checks, superko
//! - [`bot`] - Random decision policy built on the engine's query surface
//!
//! ## Example
//!
//! ```
//! use goban_rust::game::{Action, GameState};
//!
//! let mut game = GameState::new();
//!
//! // Black and White alternate automatically.
//! game.apply(Action::Move(3, 3)).unwrap();
//! game.apply(Action::Move(3, 4)).unwrap();
//!
//! assert_eq!(game.board().stones().count(), 2);
//! ```

pub mod board;
pub mod bot;
pub mod constants;
pub mod game;
pub mod group;
