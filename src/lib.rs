//! falling-blocks (workspace facade crate).
//!
//! The game is split into dedicated crates under `crates/`; this package
//! re-exports them as `falling_blocks::{core,input,settings,term,types}` and
//! ships the terminal binary.

pub use falling_blocks_core as core;
pub use falling_blocks_input as input;
pub use falling_blocks_settings as settings;
pub use falling_blocks_term as term;
pub use falling_blocks_types as types;
