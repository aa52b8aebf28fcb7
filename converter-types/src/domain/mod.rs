//! Domain models for the currency converter.

pub mod conversion;
pub mod currency;

pub use conversion::{Conversion, ConversionHistory, ConversionRequest, HistoryEntry};
pub use currency::Currency;
