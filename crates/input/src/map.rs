//! Key mapping from terminal events to key identifiers and game actions.
//!
//! Terminal keys are first named with a physical key code (`ArrowLeft`,
//! `KeyP`, `Space`, ...), then resolved through the player's [`Controls`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};

use crate::settings::Controls;
use crate::types::GameAction;

/// Commands handled by the front end itself, never rebindable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Quit,
    /// Choose one action (or all of them) and capture new keys.
    Rebind,
    ResetControls,
}

/// Name a terminal key the way bindings are stored.
///
/// Letters map to `KeyA`..`KeyZ` regardless of case, digits to `Digit0`..`Digit9`.
/// Keys without a stable name return `None`.
pub fn key_id(key: &KeyEvent) -> Option<String> {
    let id = match key.code {
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            format!("Key{}", c.to_ascii_uppercase())
        }
        KeyCode::Char(c) if c.is_ascii_digit() => format!("Digit{}", c),
        KeyCode::Char(c) => punctuation_id(c)?.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Modifier(m) => modifier_id(m)?.to_string(),
        _ => return None,
    };
    Some(id)
}

fn punctuation_id(c: char) -> Option<&'static str> {
    let id = match c {
        '-' => "Minus",
        '=' => "Equal",
        '[' => "BracketLeft",
        ']' => "BracketRight",
        '\\' => "Backslash",
        ';' => "Semicolon",
        '\'' => "Quote",
        ',' => "Comma",
        '.' => "Period",
        '/' => "Slash",
        '`' => "Backquote",
        _ => return None,
    };
    Some(id)
}

fn modifier_id(m: ModifierKeyCode) -> Option<&'static str> {
    let id = match m {
        ModifierKeyCode::LeftShift => "ShiftLeft",
        ModifierKeyCode::RightShift => "ShiftRight",
        ModifierKeyCode::LeftControl => "ControlLeft",
        ModifierKeyCode::RightControl => "ControlRight",
        ModifierKeyCode::LeftAlt => "AltLeft",
        ModifierKeyCode::RightAlt => "AltRight",
        ModifierKeyCode::LeftSuper => "MetaLeft",
        ModifierKeyCode::RightSuper => "MetaRight",
        _ => return None,
    };
    Some(id)
}

/// Whether `id` names a bare modifier key.
///
/// Terminals only report these with keyboard enhancement enabled.
pub fn is_modifier_key(id: &str) -> bool {
    ["Shift", "Control", "Alt", "Meta"]
        .iter()
        .any(|m| id.strip_prefix(m).is_some_and(|side| side == "Left" || side == "Right"))
}

/// Map keyboard input to a game action through the player's bindings.
pub fn handle_key_event(key: &KeyEvent, controls: &Controls) -> Option<GameAction> {
    let id = key_id(key)?;
    controls.action_for_key(&id)
}

/// Front-end commands: Ctrl+C / Esc quit, F2 rebinds, F3 restores defaults.
pub fn menu_command(key: &KeyEvent) -> Option<MenuCommand> {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(MenuCommand::Quit)
        }
        KeyCode::Esc => Some(MenuCommand::Quit),
        KeyCode::F(2) => Some(MenuCommand::Rebind),
        KeyCode::F(3) => Some(MenuCommand::ResetControls),
        _ => None,
    }
}
