//! Binding capture: records one key per action, in binding order.
//!
//! F2 first asks which binding to change: `1`..`7` pick one action (numbered
//! in [`GameAction::ALL`] order), `A` walks all seven.

use crate::types::GameAction;

/// Walks a run of [`GameAction::ALL`], assigning each captured key to the pending action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingCapture {
    index: usize,
    end: usize,
}

impl Default for BindingCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingCapture {
    /// Capture a key for every action.
    pub fn new() -> Self {
        Self {
            index: 0,
            end: GameAction::ALL.len(),
        }
    }

    /// Capture a key for `action` only.
    pub fn single(action: GameAction) -> Self {
        let index = GameAction::ALL
            .iter()
            .position(|a| *a == action)
            .unwrap_or(0);
        Self {
            index,
            end: index + 1,
        }
    }

    /// Pick a capture from the key pressed after F2.
    pub fn choose(key_id: &str) -> Option<Self> {
        if key_id == "KeyA" {
            return Some(Self::new());
        }
        let n: usize = key_id.strip_prefix("Digit")?.parse().ok()?;
        let action = GameAction::ALL.get(n.checked_sub(1)?)?;
        Some(Self::single(*action))
    }

    /// Action waiting for a key, or `None` once every action in the run has one.
    pub fn pending(&self) -> Option<GameAction> {
        if self.index >= self.end {
            return None;
        }
        GameAction::ALL.get(self.index).copied()
    }

    /// Assign `key` to the pending action and move to the next one.
    pub fn capture(&mut self, key: &str) -> Option<(GameAction, String)> {
        let action = self.pending()?;
        self.index += 1;
        Some((action, key.to_string()))
    }

    pub fn is_done(&self) -> bool {
        self.pending().is_none()
    }
}
