//! Application module
//!
//! Contains the core application architecture:
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> State
//! - Keymap: state-aware translation of key events into actions
//!
//! State is only ever changed by the reducer; all IO happens outside it.

pub mod actions;
pub mod event;
pub mod keymap;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, Field};
pub use reducer::reduce;
pub use state::{AppState, FormState};
