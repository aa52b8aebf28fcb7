//! Key-binding tests: key events map to the right actions per focus state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use converter_tui::app::{Action, AppState, Field, keymap::action_for, reduce};
use converter_types::Currency;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_enter_requests_conversion() {
    let state = AppState::new();
    assert_eq!(
        action_for(&state, key(KeyCode::Enter)),
        Some(Action::ConvertRequested)
    );
}

#[test]
fn test_ctrl_c_and_esc_always_quit() {
    let state = AppState::new();
    assert_eq!(action_for(&state, ctrl('c')), Some(Action::Quit));
    assert_eq!(action_for(&state, key(KeyCode::Esc)), Some(Action::Quit));
}

#[test]
fn test_q_is_input_while_amount_focused() {
    let state = AppState::new();
    assert_eq!(state.form.focus, Field::Amount);
    // 'q' routes to the amount field (where the reducer rejects it), not to Quit.
    assert_eq!(
        action_for(&state, key(KeyCode::Char('q'))),
        Some(Action::AmountInput('q'))
    );

    let state = reduce(state, Action::FocusNext);
    assert_eq!(
        action_for(&state, key(KeyCode::Char('q'))),
        Some(Action::Quit)
    );
}

#[test]
fn test_tab_cycles_focus() {
    let mut state = AppState::new();
    assert_eq!(state.form.focus, Field::Amount);

    state = reduce(state, Action::FocusNext);
    assert_eq!(state.form.focus, Field::From);
    state = reduce(state, Action::FocusNext);
    assert_eq!(state.form.focus, Field::To);
    state = reduce(state, Action::FocusNext);
    assert_eq!(state.form.focus, Field::Amount);

    state = reduce(state, Action::FocusPrev);
    assert_eq!(state.form.focus, Field::To);
}

#[test]
fn test_typed_digits_edit_amount() {
    let mut state = AppState::new();
    for c in ['2', '.', '5'] {
        let action = action_for(&state, key(KeyCode::Char(c))).unwrap();
        state = reduce(state, action);
    }
    assert_eq!(state.form.amount_input, "12.5");

    let action = action_for(&state, key(KeyCode::Backspace)).unwrap();
    state = reduce(state, action);
    assert_eq!(state.form.amount_input, "12.");
}

#[test]
fn test_arrows_cycle_focused_selector() {
    let mut state = AppState::new();
    state.form.focus = Field::To;
    assert_eq!(state.form.to, Currency::INR);

    let action = action_for(&state, key(KeyCode::Right)).unwrap();
    state = reduce(state, action);
    assert_eq!(state.form.to, Currency::EUR);

    let action = action_for(&state, key(KeyCode::Left)).unwrap();
    state = reduce(state, action);
    assert_eq!(state.form.to, Currency::INR);

    // The other selector is untouched.
    assert_eq!(state.form.from, Currency::USD);
}

#[test]
fn test_arrows_do_nothing_while_amount_focused() {
    let state = AppState::new();
    assert_eq!(action_for(&state, key(KeyCode::Left)), None);
    assert_eq!(action_for(&state, key(KeyCode::Right)), None);
}
