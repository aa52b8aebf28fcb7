//! # Converter Types
//!
//! Domain types and port traits for the currency converter.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Currency, ConversionRequest, ConversionHistory)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto` - Data Transfer Objects for the rate-service wire boundary
//! - `error` - Workflow and provider error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Conversion, ConversionHistory, ConversionRequest, Currency, HistoryEntry};
pub use dto::RatesResponse;
pub use error::{ConversionError, ProviderError};
pub use ports::RateProvider;
