//! Key bindings for the seven logical actions.
//!
//! Key identifiers are physical key codes in the style of DOM `KeyboardEvent.code`
//! (`ArrowLeft`, `Space`, `KeyP`, `ShiftLeft`, ...). Bindings are free-form:
//! two actions may share a key, in which case the earlier action in
//! [`GameAction::ALL`] wins.

use serde::{Deserialize, Serialize};

use crate::types::GameAction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Controls {
    pub move_left: String,
    pub move_right: String,
    pub move_down: String,
    pub rotate: String,
    pub hard_drop: String,
    pub hold: String,
    pub pause: String,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            move_left: "ArrowLeft".to_string(),
            move_right: "ArrowRight".to_string(),
            move_down: "ArrowDown".to_string(),
            rotate: "ArrowUp".to_string(),
            hard_drop: "Space".to_string(),
            hold: "ShiftLeft".to_string(),
            pause: "KeyP".to_string(),
        }
    }
}

impl Controls {
    /// Key bound to `action`.
    pub fn key_for(&self, action: GameAction) -> &str {
        match action {
            GameAction::MoveLeft => &self.move_left,
            GameAction::MoveRight => &self.move_right,
            GameAction::MoveDown => &self.move_down,
            GameAction::Rotate => &self.rotate,
            GameAction::HardDrop => &self.hard_drop,
            GameAction::Hold => &self.hold,
            GameAction::Pause => &self.pause,
        }
    }

    /// Rebind `action`. No check against other bindings.
    pub fn set(&mut self, action: GameAction, key: impl Into<String>) {
        let slot = match action {
            GameAction::MoveLeft => &mut self.move_left,
            GameAction::MoveRight => &mut self.move_right,
            GameAction::MoveDown => &mut self.move_down,
            GameAction::Rotate => &mut self.rotate,
            GameAction::HardDrop => &mut self.hard_drop,
            GameAction::Hold => &mut self.hold,
            GameAction::Pause => &mut self.pause,
        };
        *slot = key.into();
    }

    /// First action (in binding order) bound to `key`.
    pub fn action_for_key(&self, key: &str) -> Option<GameAction> {
        GameAction::ALL
            .into_iter()
            .find(|&action| self.key_for(action) == key)
    }

    /// (action, key) pairs in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (GameAction, &str)> + '_ {
        GameAction::ALL
            .into_iter()
            .map(move |action| (action, self.key_for(action)))
    }
}
