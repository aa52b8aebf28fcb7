//! # Converter Client
//!
//! Outbound HTTP adapter for the rate-conversion service (a Frankfurter-style
//! API). Implements the [`RateProvider`] port over a single GET request:
//!
//! `GET {base}/latest?amount={amount}&from={from}&to={to}`
//!
//! No authentication, no retry, and deliberately no timeout (an unresponsive
//! service holds the caller's in-flight state; see DESIGN.md).

use reqwest::Client;

use converter_types::{Currency, ProviderError, RateProvider, RatesResponse};

/// Default public endpoint. Override with [`RatesClient::new`].
pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

/// HTTP client for the rate-conversion service.
pub struct RatesClient {
    base_url: String,
    http: Client,
}

impl RatesClient {
    /// Creates a new client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for RatesClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl RateProvider for RatesClient {
    async fn fetch_rates(
        &self,
        amount: f64,
        from: Currency,
        to: Currency,
    ) -> Result<RatesResponse, ProviderError> {
        let url = format!("{}/latest", self.base_url);
        tracing::debug!(%url, amount, %from, %to, "fetching rates");

        // The status is intentionally not checked before decoding: an error
        // body that is valid JSON but lacks the rate surfaces downstream as
        // ConversionUnavailable, a non-JSON body as a decode failure.
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("amount", amount.to_string()),
                ("from", from.code().to_string()),
                ("to", to.code().to_string()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let body = resp
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}
