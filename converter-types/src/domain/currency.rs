//! Supported currencies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currencies the converter offers in its selectors.
///
/// The set is data, not structure: adding a variant here extends the UI
/// selectors, parsing, and `all()` automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    INR,
    EUR,
}

impl Currency {
    /// Returns the ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::INR => "INR",
            Currency::EUR => "EUR",
        }
    }

    /// Returns the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::INR => "₹",
            Currency::EUR => "€",
        }
    }

    /// All supported currencies, in selector order.
    pub fn all() -> &'static [Currency] {
        &[Currency::USD, Currency::INR, Currency::EUR]
    }

    /// The next currency in selector order, wrapping around.
    pub fn next(&self) -> Currency {
        let all = Self::all();
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// The previous currency in selector order, wrapping around.
    pub fn prev(&self) -> Currency {
        let all = Self::all();
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "INR" => Ok(Currency::INR),
            "EUR" => Ok(Currency::EUR),
            _ => Err(format!("Unknown currency: {}", s)),
        }
    }
}
