//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It names `crossterm` key
//! events with physical key identifiers, resolves them to
//! [`crate::types::GameAction`]s through the player's bindings, and provides
//! the binding capture flow used by the settings screen.

pub mod capture;
pub mod hints;
pub mod map;

pub use falling_blocks_settings as settings;
pub use falling_blocks_types as types;

pub use capture::BindingCapture;
pub use hints::{action_label, binding_hints, capture_prompt, CHOOSE_PROMPT};
pub use map::{handle_key_event, is_modifier_key, key_id, menu_command, MenuCommand};
