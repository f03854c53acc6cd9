//! Game state module - manages the complete game state
//!
//! This module ties together the board, the shape catalog, the randomizer and
//! the scoring policy. Every transition runs to completion synchronously and
//! rejected transitions leave the state untouched without signalling.

use crate::board::Board;
use crate::rng::Randomizer;
use crate::scoring::{gravity_interval_ms, level_for_score, score_for_clear};
use crate::shape::{random_piece, Piece};
use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

/// Lifecycle phase, derived from the state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No game has been initialized yet.
    Uninitialized,
    Playing,
    /// Initialized (or paused mid-game) and waiting for `toggle_play`.
    Paused,
    GameOver,
}

/// Outcome of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points awarded for the clear (also counted toward the high score on game over).
    pub points: u32,
    /// The next piece could not spawn; the game ended on this lock.
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    held: Option<Piece>,
    can_hold: bool,
    score: u32,
    playing: bool,
    game_over: bool,
    high_score: u32,
    randomizer: Randomizer,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create an uninitialized game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            held: None,
            can_hold: true,
            score: 0,
            playing: false,
            game_over: false,
            high_score: 0,
            randomizer: Randomizer::new(seed),
            last_event: None,
        }
    }

    /// Seed the persisted high score.
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = high_score;
        self
    }

    /// Reset everything except the high score and leave the game paused.
    pub fn init_game(&mut self) {
        self.board = Board::new();
        self.current = Some(random_piece(&mut self.randomizer));
        self.next = Some(random_piece(&mut self.randomizer));
        self.held = None;
        self.can_hold = true;
        self.score = 0;
        self.playing = false;
        self.game_over = false;
        self.last_event = None;
    }

    /// Flip between playing and paused. After a game over this starts a new game.
    ///
    /// A game that was never initialized is initialized first.
    pub fn toggle_play(&mut self) {
        let was_playing = self.playing;
        if self.game_over || self.current.is_none() {
            self.init_game();
        }
        self.playing = !was_playing;
    }

    pub fn move_left(&mut self) {
        self.shift(-1);
    }

    pub fn move_right(&mut self) {
        self.shift(1);
    }

    fn shift(&mut self, dx: i8) {
        if !self.playing {
            return;
        }
        let Some(current) = self.current else {
            return;
        };

        let new_x = current.x + dx;
        if self
            .board
            .is_valid_placement(current.matrix(), new_x, current.y)
        {
            self.current = Some(current.at(new_x, current.y));
        }
    }

    /// Fall one row, or lock the piece if it cannot fall.
    ///
    /// Gravity ticks and manual soft drops both come through here.
    pub fn move_down(&mut self) {
        if !self.playing {
            return;
        }
        let (Some(current), Some(next)) = (self.current, self.next) else {
            return;
        };

        let new_y = current.y + 1;
        if self
            .board
            .is_valid_placement(current.matrix(), current.x, new_y)
        {
            self.current = Some(current.at(current.x, new_y));
            return;
        }

        self.lock(current, next);
    }

    /// Merge `current`, clear rows, score, then spawn `next` or end the game.
    fn lock(&mut self, current: Piece, next: Piece) {
        let merged = self.board.merge(&current);
        let (cleared, lines) = merged.clear_full_rows();
        let points = score_for_clear(lines, self.level());
        let new_score = self.score.saturating_add(points);

        if !cleared.is_valid_placement(next.matrix(), next.x, next.y) {
            self.game_over = true;
            self.playing = false;
            self.high_score = self.high_score.max(new_score);
            self.last_event = Some(LockEvent {
                lines_cleared: lines as u32,
                points,
                game_over: true,
            });
            log::debug!(
                "game over: {:?} blocked at spawn, final score {}",
                next.kind(),
                new_score
            );
            return;
        }

        self.board = cleared;
        self.current = Some(next);
        self.next = Some(random_piece(&mut self.randomizer));
        self.score = new_score;
        self.can_hold = true;
        self.last_event = Some(LockEvent {
            lines_cleared: lines as u32,
            points,
            game_over: false,
        });

        if lines > 0 {
            log::debug!(
                "cleared {} line(s) for {} points, score {}, level {}",
                lines,
                points,
                self.score,
                self.level()
            );
        }
    }

    /// Rotate clockwise in place. No kicks: rejected if it doesn't fit at the current anchor.
    pub fn rotate(&mut self) {
        if !self.playing {
            return;
        }
        let Some(current) = self.current else {
            return;
        };

        let shape = current.shape.rotated();
        if self
            .board
            .is_valid_placement(&shape.matrix, current.x, current.y)
        {
            self.current = Some(Piece { shape, ..current });
        }
    }

    /// Drop to the resting row and lock immediately. Awards no distance bonus.
    pub fn hard_drop(&mut self) {
        if !self.playing {
            return;
        }
        let Some(current) = self.current else {
            return;
        };

        let rest_y = self.resting_y(&current);
        self.current = Some(current.at(current.x, rest_y));
        self.move_down();
    }

    /// Set the current piece aside, or swap it with the held one. Once per lock.
    pub fn hold_piece(&mut self) {
        if !self.playing || !self.can_hold {
            return;
        }
        let Some(current) = self.current else {
            return;
        };

        match self.held {
            None => {
                self.held = Some(current.respawned());
                self.current = self.next.take();
                self.next = Some(random_piece(&mut self.randomizer));
            }
            Some(held) => {
                self.current = Some(held.respawned());
                self.held = Some(current.respawned());
            }
        }

        self.can_hold = false;
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Hold => self.hold_piece(),
            GameAction::Pause => self.toggle_play(),
        }
    }

    /// Lowest row the piece can reach by falling straight down.
    fn resting_y(&self, piece: &Piece) -> i8 {
        let mut y = piece.y;
        while self.board.is_valid_placement(piece.matrix(), piece.x, y + 1) {
            y += 1;
        }
        y
    }

    /// Board copy with the current piece drawn in, for rendering.
    pub fn render_board(&self) -> Board {
        match self.current {
            Some(ref piece) => self.board.merge(piece),
            None => self.board.clone(),
        }
    }

    /// Calculate the ghost piece Y position (where a hard drop would land)
    ///
    /// Only shown while playing.
    pub fn ghost_y(&self) -> Option<i8> {
        if !self.playing {
            return None;
        }
        self.current.as_ref().map(|piece| self.resting_y(piece))
    }

    /// Current gravity interval based on level
    pub fn drop_interval_ms(&self) -> u32 {
        gravity_interval_ms(self.level())
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.render_board(),
            ghost: self
                .current
                .zip(self.ghost_y())
                .map(|(piece, y)| piece.at(piece.x, y)),
            current: self.current,
            next: self.next,
            held: self.held,
            can_hold: self.can_hold,
            score: self.score,
            high_score: self.high_score,
            level: self.level(),
            phase: self.phase(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.current.is_none() {
            Phase::Uninitialized
        } else if self.playing {
            Phase::Playing
        } else {
            Phase::Paused
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn held(&self) -> Option<Piece> {
        self.held
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Always `score / 1000 + 1`; never stored.
    pub fn level(&self) -> u32 {
        level_for_score(self.score)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Replace the locked cells, e.g. to set up a puzzle position.
    pub fn load_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Replace the falling piece.
    pub fn load_current(&mut self, piece: Option<Piece>) {
        self.current = piece;
    }

    /// Replace the upcoming piece.
    pub fn load_next(&mut self, piece: Option<Piece>) {
        self.next = piece;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
