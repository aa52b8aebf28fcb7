//! Conversion request, result, and bounded history.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use super::Currency;

/// Maximum number of history entries retained.
pub const HISTORY_CAPACITY: usize = 5;

/// The user-editable conversion parameters.
///
/// `from` and `to` are independently selectable; converting a currency to
/// itself is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: Currency,
    pub to: Currency,
}

impl Default for ConversionRequest {
    fn default() -> Self {
        Self {
            amount: 1.0,
            from: Currency::USD,
            to: Currency::INR,
        }
    }
}

/// The most recent successful outcome of the workflow.
///
/// Holds the request snapshot it was produced from and the rate formatted to
/// exactly two decimal places. Replaced wholesale on each attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub request: ConversionRequest,
    pub display_value: String,
}

impl Conversion {
    /// Builds a conversion result from a raw rate, formatting it to two
    /// decimal places.
    pub fn new(request: ConversionRequest, rate: f64) -> Self {
        Self {
            request,
            display_value: format!("{:.2}", rate),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            self.request.amount, self.request.from, self.display_value, self.request.to
        )
    }
}

/// Immutable record of one completed conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub amount: f64,
    pub from: Currency,
    pub to: Currency,
    pub display_value: String,
}

impl From<&Conversion> for HistoryEntry {
    fn from(conversion: &Conversion) -> Self {
        Self {
            amount: conversion.request.amount,
            from: conversion.request.from,
            to: conversion.request.to,
            display_value: conversion.display_value.clone(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {}: {}",
            self.amount, self.from, self.to, self.display_value
        )
    }
}

/// Bounded sequence of past conversions, most recent first.
///
/// Invariant: `len() <= HISTORY_CAPACITY`. Entries are never mutated once
/// recorded; the oldest entry is dropped silently past the bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionHistory {
    entries: VecDeque<HistoryEntry>,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends an entry, dropping the oldest past the capacity bound.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Iterates entries most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
