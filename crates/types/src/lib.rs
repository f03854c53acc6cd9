//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the settings store, the key mapper and the renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn anchor**: (4, 0), i.e. `BOARD_WIDTH / 2 - 1`
//!
//! # Gravity by Level
//!
//! The automatic fall interval shrinks as the level rises:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 3 | 800ms |
//! | ... | ... |
//! | 9 | 200ms |
//! | 10+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.color(), "#a000f0");
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//! assert_eq!(GameAction::ALL.len(), 7);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column of the shape matrix's top-left cell when a piece spawns.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Row of the shape matrix's top-left cell when a piece spawns.
pub const SPAWN_Y: i8 = 0;

/// Largest shape matrix side (the I piece is 4x4).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Frame interval of the terminal loop in milliseconds (16ms ≈ 60 FPS).
///
/// This only paces rendering and input polling; gravity has its own timer.
pub const TICK_MS: u32 = 16;

/// Points needed to advance one level.
pub const POINTS_PER_LEVEL: u32 = 1000;

/// Line clear scoring table
///
/// Base points for clearing N lines with a single placement:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by the level in effect before the placement.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Gravity interval in milliseconds, index 0 = level 1, index 9 = level 10.
pub const GAME_SPEEDS: [u32; 10] = [1000, 900, 800, 700, 600, 500, 400, 300, 200, 100];


/// The seven tetromino piece kinds
///
/// Each kind has a distinct shape and display color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **J**: Blue, J-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Display color token for cells occupied by this kind.
    ///
    /// ```
    /// use falling_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.color(), "#00f0f0");
    /// assert_eq!(PieceKind::Z.color(), "#f00000");
    /// ```
    pub fn color(&self) -> &'static str {
        match self {
            PieceKind::I => "#00f0f0",
            PieceKind::O => "#f0f000",
            PieceKind::T => "#a000f0",
            PieceKind::L => "#f0a000",
            PieceKind::J => "#0000f0",
            PieceKind::S => "#00f000",
            PieceKind::Z => "#f00000",
        }
    }
}

/// Logical player actions
///
/// These are the seven bindable actions. Key bindings map input-device key
/// identifiers onto them, and the engine exposes one transition per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell, locking it if it cannot fall
    MoveDown,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Instantly drop piece to lowest valid position and lock it
    HardDrop,
    /// Hold current piece (once per lock)
    Hold,
    /// Toggle play/pause, restarting after a game over
    Pause,
}

impl GameAction {
    /// All actions in binding order.
    ///
    /// When two actions share a key, the earlier one wins.
    pub const ALL: [GameAction; 7] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::Pause,
    ];

    /// Convert to camelCase name (the persisted binding key)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Hold => "hold",
            GameAction::Pause => "pause",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell occupied by the given kind (and drawn in its color)
pub type Cell = Option<PieceKind>;
