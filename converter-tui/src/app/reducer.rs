//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`, no IO, no side effects. The conversion
//! request itself is spawned outside the reducer; its completion comes back
//! in as `ConvertSucceeded` / `ConvertFailed`.

use converter_types::HistoryEntry;

use super::actions::{Action, Field};
use super::state::{AppState, FormState};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        // === Form editing ===
        Action::AmountInput(c) => {
            // Native-numeric-input analog: digits plus at most one '.'.
            let accept = c.is_ascii_digit() || (c == '.' && !state.form.amount_input.contains('.'));
            if !accept {
                return state;
            }
            let mut amount_input = state.form.amount_input.clone();
            amount_input.push(c);
            AppState {
                form: FormState {
                    amount_input,
                    ..state.form
                },
                ..state
            }
        }

        Action::AmountBackspace => {
            let mut amount_input = state.form.amount_input.clone();
            amount_input.pop();
            AppState {
                form: FormState {
                    amount_input,
                    ..state.form
                },
                ..state
            }
        }

        Action::FocusNext => AppState {
            form: FormState {
                focus: state.form.focus.next(),
                ..state.form
            },
            ..state
        },

        Action::FocusPrev => AppState {
            form: FormState {
                focus: state.form.focus.prev(),
                ..state.form
            },
            ..state
        },

        Action::SelectorNext | Action::SelectorPrev => {
            let forward = matches!(action, Action::SelectorNext);
            let mut form = state.form.clone();
            match form.focus {
                Field::From => {
                    form.from = if forward { form.from.next() } else { form.from.prev() };
                }
                Field::To => {
                    form.to = if forward { form.to.next() } else { form.to.prev() };
                }
                Field::Amount => {}
            }
            AppState { form, ..state }
        }

        // === Conversion workflow ===
        Action::ConvertRequested => {
            // Handled outside the reducer; state transitions happen via
            // ConvertStarted once the request is actually spawned.
            state
        }

        Action::ConvertStarted => AppState {
            converting: true,
            result: None,
            error: None,
            ..state
        },

        Action::ConvertSucceeded(conversion) => {
            let mut history = state.history.clone();
            history.record(HistoryEntry::from(&conversion));
            AppState {
                converting: false,
                result: Some(conversion),
                error: None,
                history,
                ..state
            }
        }

        Action::ConvertFailed(kind) => AppState {
            converting: false,
            result: None,
            error: Some(kind),
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use converter_types::{Conversion, ConversionError, ConversionRequest};

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::new();
        let before = state.clone();

        let _ = reduce(state.clone(), Action::Quit);

        assert!(!before.should_quit);
    }

    #[test]
    fn test_quit_action() {
        let state = reduce(AppState::new(), Action::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_amount_rejects_second_decimal_point() {
        let mut state = AppState::new();
        state.form.amount_input = "1.5".to_string();
        let state = reduce(state, Action::AmountInput('.'));
        assert_eq!(state.form.amount_input, "1.5");
    }

    #[test]
    fn test_amount_rejects_non_numeric() {
        let state = reduce(AppState::new(), Action::AmountInput('x'));
        assert_eq!(state.form.amount_input, "1");
    }

    #[test]
    fn test_selector_cycles_focused_field_only() {
        let mut state = AppState::new();
        state.form.focus = Field::From;
        let from_before = state.form.from;
        let to_before = state.form.to;

        let state = reduce(state, Action::SelectorNext);
        assert_ne!(state.form.from, from_before);
        assert_eq!(state.form.to, to_before);
    }

    #[test]
    fn test_started_clears_prior_outcome() {
        let mut state = AppState::new();
        state.error = Some(ConversionError::NetworkFailure);
        state.result = Some(Conversion::new(ConversionRequest::default(), 80.0));

        let state = reduce(state, Action::ConvertStarted);
        assert!(state.converting);
        assert!(state.result.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_success_records_history_and_clears_flag() {
        let state = reduce(AppState::new(), Action::ConvertStarted);
        let conversion = Conversion::new(ConversionRequest::default(), 83.456);
        let state = reduce(state, Action::ConvertSucceeded(conversion));

        assert!(!state.converting);
        assert_eq!(state.history.len(), 1);
        assert_eq!(
            state.result.as_ref().map(|c| c.display_value.as_str()),
            Some("83.46")
        );
        assert!(state.error.is_none());
    }

    #[test]
    fn test_failure_adds_no_history() {
        let state = reduce(AppState::new(), Action::ConvertStarted);
        let state = reduce(
            state,
            Action::ConvertFailed(ConversionError::ConversionUnavailable),
        );

        assert!(!state.converting);
        assert!(state.history.is_empty());
        assert!(state.result.is_none());
        assert_eq!(state.error, Some(ConversionError::ConversionUnavailable));
    }
}
