//! Terminal rendering for falling-blocks.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! [`GameView`] paints a [`core::GameSnapshot`] into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes only the cells that changed since the last frame.
//! Board cells are two columns wide to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
