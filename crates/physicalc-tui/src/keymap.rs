//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    ToggleUnits,
    FocusNext,
    FocusPrev,
    Increment,
    Decrement,
    PageIncrement,
    PageDecrement,
    JumpMin,
    JumpMax,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('u') => KeyAction::ToggleUnits,
        KeyCode::Tab => KeyAction::FocusNext,
        KeyCode::BackTab => KeyAction::FocusPrev,
        KeyCode::Right | KeyCode::Up => KeyAction::Increment,
        KeyCode::Left | KeyCode::Down => KeyAction::Decrement,
        KeyCode::PageUp => KeyAction::PageIncrement,
        KeyCode::PageDown => KeyAction::PageDecrement,
        KeyCode::Home => KeyAction::JumpMin,
        KeyCode::End => KeyAction::JumpMax,
        _ => KeyAction::None,
    }
}
