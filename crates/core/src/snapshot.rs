//! Render-ready projection of a [`GameState`](crate::GameState).
//!
//! A snapshot is a fresh copy; holding one never borrows the game.

use crate::board::Board;
use crate::game_state::Phase;
use crate::shape::Piece;

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Locked cells with the current piece drawn in.
    pub board: Board,
    /// Where a hard drop would land the current piece (only while playing).
    pub ghost: Option<Piece>,
    pub current: Option<Piece>,
    pub next: Option<Piece>,
    pub held: Option<Piece>,
    pub can_hold: bool,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::new(),
            ghost: None,
            current: None,
            next: None,
            held: None,
            can_hold: true,
            score: 0,
            high_score: 0,
            level: 1,
            phase: Phase::Uninitialized,
        }
    }
}
