//! Key bindings
//!
//! State-aware translation of key events into actions. Keeping this outside
//! the reducer keeps the reducer free of crossterm types and lets the key
//! routing depend on focus and the in-flight flag.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::{Action, Field};
use super::state::AppState;

/// Maps a key event to an action, if it means anything in the current state.
pub fn action_for(state: &AppState, key: KeyEvent) -> Option<Action> {
    // Global bindings
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(Action::Quit),
        (KeyCode::Esc, _) => return Some(Action::Quit),
        (KeyCode::Char('q'), KeyModifiers::NONE) if state.form.focus != Field::Amount => {
            return Some(Action::Quit);
        }
        (KeyCode::Tab, _) => return Some(Action::FocusNext),
        (KeyCode::BackTab, _) => return Some(Action::FocusPrev),
        (KeyCode::Enter, _) => return Some(Action::ConvertRequested),
        _ => {}
    }

    // Focused-widget bindings
    match state.form.focus {
        Field::Amount => match key.code {
            KeyCode::Char(c) => Some(Action::AmountInput(c)),
            KeyCode::Backspace => Some(Action::AmountBackspace),
            _ => None,
        },
        Field::From | Field::To => match key.code {
            KeyCode::Left | KeyCode::Up => Some(Action::SelectorPrev),
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => Some(Action::SelectorNext),
            _ => None,
        },
    }
}
