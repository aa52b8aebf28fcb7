//! Data Transfer Objects for the rate-service wire boundary.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::Currency;

/// Response body of the rate-conversion service.
///
/// Shape: `{ "rates": { "<code>": <number>, ... } }`. Fields the service
/// returns beyond `rates` (base, date, ...) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatesResponse {
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

impl RatesResponse {
    /// Looks up the rate for the given target currency, if present.
    pub fn rate_for(&self, currency: Currency) -> Option<f64> {
        self.rates.get(currency.code()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_frankfurter_shape() {
        let body = r#"{"amount":1.0,"base":"USD","date":"2024-05-31","rates":{"INR":83.456}}"#;
        let resp: RatesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.rate_for(Currency::INR), Some(83.456));
        assert_eq!(resp.rate_for(Currency::EUR), None);
    }

    #[test]
    fn test_missing_rates_field_decodes_empty() {
        let resp: RatesResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.rates.is_empty());
        assert_eq!(resp.rate_for(Currency::INR), None);
    }
}
