//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management and simulation logic.
//! It has **no dependencies** on UI, terminal or storage, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Unit tests for every rule, integration tests at the workspace root
//! - **Portable**: Can run under the terminal front end or headless
//!
//! # Module Structure
//!
//! - [`shape`]: Tetromino matrices, clockwise matrix rotation, pieces
//! - [`board`]: 10x20 board with placement checks, merging and line clearing
//! - [`scoring`]: Line clear points, level from score, gravity intervals
//! - [`rng`]: Uniform random piece selection
//! - [`game_state`]: The state machine (move, rotate, drop, hold, pause)
//! - [`snapshot`]: Render-ready copy of the state
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each kind has a 1/7 chance on every draw
//! - **Naive rotation**: clockwise only, no wall kicks
//! - **Instant lock**: a piece locks on the first gravity tick or soft drop it cannot fall
//! - **Hold**: once per lock, swapping with any held piece
//! - **Scoring**: 40/100/300/1200 × level for 1-4 lines; level = score / 1000 + 1
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::{GameState, Phase};
//! use falling_blocks_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.init_game();
//! assert_eq!(game.phase(), Phase::Paused);
//!
//! game.apply_action(GameAction::Pause);
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.score(), 0); // Drops alone never score
//! assert!(game.board().filled_count() > 0);
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, LockEvent, Phase};
pub use rng::{Randomizer, SimpleRng};
pub use scoring::{gravity_interval_ms, level_for_score, score_for_clear};
pub use shape::{random_piece, rotate_matrix, spawn_shape, Matrix, Piece, Shape};
pub use snapshot::GameSnapshot;
