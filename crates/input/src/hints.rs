//! Side-panel help text for the current bindings.

use crate::map::is_modifier_key;
use crate::settings::Controls;
use crate::types::GameAction;

/// Short display name of an action.
pub fn action_label(action: GameAction) -> &'static str {
    match action {
        GameAction::MoveLeft => "Left",
        GameAction::MoveRight => "Right",
        GameAction::MoveDown => "Down",
        GameAction::Rotate => "Rotate",
        GameAction::HardDrop => "Drop",
        GameAction::Hold => "Hold",
        GameAction::Pause => "Pause",
    }
}

/// One line per binding, then the front-end keys.
///
/// When the terminal does not report bare modifier keys, actions bound to
/// one get a warning line instead of silently doing nothing.
pub fn binding_hints(controls: &Controls, modifiers_reported: bool) -> Vec<String> {
    let mut hints: Vec<String> = controls
        .iter()
        .enumerate()
        .map(|(i, (action, key))| format!("{} {:<7}{}", i + 1, action_label(action), key))
        .collect();

    if !modifiers_reported {
        for (action, key) in controls.iter() {
            if is_modifier_key(key) {
                hints.push(format!("! {} needs F2 rebind", action_label(action)));
            }
        }
    }

    hints.push(String::new());
    hints.push("F2 rebind  F3 reset".to_string());
    hints.push("Esc quit".to_string());
    hints
}

/// Prompt shown after F2, before an action is chosen.
pub const CHOOSE_PROMPT: &str = "Rebind: 1-7 or A";

/// Prompt while waiting for the key of `action`.
pub fn capture_prompt(action: GameAction) -> String {
    format!("Key for {}?", action_label(action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_list_every_binding_numbered() {
        let hints = binding_hints(&Controls::default(), true);
        assert_eq!(hints[0], "1 Left   ArrowLeft");
        assert_eq!(hints[5], "6 Hold   ShiftLeft");
        assert_eq!(hints[6], "7 Pause  KeyP");
        assert!(!hints.iter().any(|h| h.starts_with('!')));
    }

    #[test]
    fn test_unreported_modifier_gets_warning() {
        let hints = binding_hints(&Controls::default(), false);
        assert!(hints.contains(&"! Hold needs F2 rebind".to_string()));

        let mut controls = Controls::default();
        controls.set(GameAction::Hold, "KeyC");
        let hints = binding_hints(&controls, false);
        assert!(!hints.iter().any(|h| h.starts_with('!')));
    }

    #[test]
    fn test_capture_prompt() {
        assert_eq!(capture_prompt(GameAction::HardDrop), "Key for Drop?");
    }
}
