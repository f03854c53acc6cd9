//! Persisted player preferences: key bindings and the high score.
//!
//! Preferences live outside any single game. They are loaded once at startup
//! and written back in full after every change (last write wins).
//!
//! - [`controls`]: the action → key identifier map and its defaults
//! - [`store`]: the [`SettingsStore`] backend trait, a JSON file backend and an in-memory one
//! - [`preferences`]: [`Preferences`], the load-at-startup / save-on-mutation wrapper
//!
//! # Example
//!
//! ```
//! use falling_blocks_settings::{MemoryStore, Preferences};
//! use falling_blocks_types::GameAction;
//!
//! let mut prefs = Preferences::load(MemoryStore::default());
//! assert_eq!(prefs.controls().key_for(GameAction::Hold), "ShiftLeft");
//!
//! prefs.update_control(GameAction::Hold, "KeyC");
//! assert_eq!(prefs.controls().action_for_key("KeyC"), Some(GameAction::Hold));
//! assert_eq!(prefs.store().save_count(), 1);
//! ```

pub mod controls;
pub mod preferences;
pub mod store;

pub use falling_blocks_types as types;

pub use controls::Controls;
pub use preferences::Preferences;
pub use store::{JsonFileStore, MemoryStore, Settings, SettingsStore, SETTINGS_ENV, SETTINGS_FILE};
