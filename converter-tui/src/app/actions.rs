//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Actions are immutable
//! values describing what should happen; the reducer (see `reducer.rs`)
//! applies them to state.

use converter_types::{Conversion, ConversionError};

/// Actions that trigger state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quit the application
    Quit,

    // === Form editing ===
    /// A character typed into the amount field
    AmountInput(char),

    /// Backspace in the amount field
    AmountBackspace,

    /// Move focus to the next widget
    FocusNext,

    /// Move focus to the previous widget
    FocusPrev,

    /// Cycle the focused currency selector forward
    SelectorNext,

    /// Cycle the focused currency selector backward
    SelectorPrev,

    // === Conversion workflow ===
    /// User pressed the trigger control. Side effects (spawning the
    /// request) happen outside the reducer; see `main.rs`.
    ConvertRequested,

    /// A request went out: enter in-flight state, clear prior result/error
    ConvertStarted,

    /// The request resolved with a formatted rate
    ConvertSucceeded(Conversion),

    /// The request failed, terminally for this attempt
    ConvertFailed(ConversionError),
}

/// Focusable form widgets, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    From,
    To,
}

impl Field {
    pub fn next(&self) -> Field {
        match self {
            Field::Amount => Field::From,
            Field::From => Field::To,
            Field::To => Field::Amount,
        }
    }

    pub fn prev(&self) -> Field {
        match self {
            Field::Amount => Field::To,
            Field::From => Field::Amount,
            Field::To => Field::From,
        }
    }
}
