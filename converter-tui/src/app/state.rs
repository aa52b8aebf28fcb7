//! Application state
//!
//! Single source of truth for the UI. State transitions happen only through
//! the reducer (see `reducer.rs`).

use converter_types::{Conversion, ConversionError, ConversionHistory, ConversionRequest, Currency};

use super::actions::Field;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// The editable conversion form
    pub form: FormState,

    /// In-flight flag: a conversion request is currently outstanding
    pub converting: bool,

    /// Most recent successful outcome; mutually exclusive with `error`
    pub result: Option<Conversion>,

    /// Most recent failure; mutually exclusive with `result`
    pub error: Option<ConversionError>,

    /// Rolling history of completed conversions, most recent first
    pub history: ConversionHistory,
}

/// The user-editable form fields
#[derive(Debug, Clone)]
pub struct FormState {
    /// Raw amount text. Keystrokes are constrained to digits plus at most
    /// one decimal point, the TUI analog of a native numeric input.
    pub amount_input: String,

    pub from: Currency,
    pub to: Currency,

    /// Which widget has keyboard focus
    pub focus: Field,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            form: FormState::default(),
            converting: false,
            result: None,
            error: None,
            history: ConversionHistory::new(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        let defaults = ConversionRequest::default();
        Self {
            amount_input: defaults.amount.to_string(),
            from: defaults.from,
            to: defaults.to,
            focus: Field::Amount,
        }
    }
}

impl FormState {
    /// The request the form currently describes, if the amount parses.
    pub fn request(&self) -> Option<ConversionRequest> {
        let amount: f64 = self.amount_input.parse().ok()?;
        Some(ConversionRequest {
            amount,
            from: self.from,
            to: self.to,
        })
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the trigger control is currently enabled.
    pub fn can_convert(&self) -> bool {
        !self.converting && self.form.request().is_some()
    }

    /// Label of the trigger control.
    pub fn convert_label(&self) -> &'static str {
        if self.converting {
            "Converting..."
        } else {
            "Convert"
        }
    }
}
