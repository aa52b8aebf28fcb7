//! # Converter Core
//!
//! Application service for the conversion workflow. Contains NO
//! infrastructure logic - the rate provider adapter is injected through the
//! [`RateProvider`](converter_types::RateProvider) port.

mod service;

pub use service::ConversionService;
