//! Conversion workflow service.
//!
//! Orchestrates one network request per attempt and interprets the response.
//! Produces exactly one of {Conversion, ConversionError}; never retries.

use converter_types::{Conversion, ConversionError, ConversionRequest, RateProvider};

/// Application service for currency conversion.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile time.
/// This enables:
/// - Swapping providers without code changes
/// - Testing with mock providers
/// - Compile-time checks for port implementation
pub struct ConversionService<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> ConversionService<P> {
    /// Creates a new conversion service with the given rate provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Runs one conversion attempt.
    ///
    /// Any provider failure (transport or decode) collapses into
    /// [`ConversionError::NetworkFailure`]; a response without the target
    /// rate is [`ConversionError::ConversionUnavailable`]. On success the
    /// rate is formatted to two decimal places.
    pub async fn convert(&self, request: ConversionRequest) -> Result<Conversion, ConversionError> {
        let rates = self
            .provider
            .fetch_rates(request.amount, request.from, request.to)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "rate fetch failed");
                ConversionError::NetworkFailure
            })?;

        match rates.rate_for(request.to) {
            Some(rate) => Ok(Conversion::new(request, rate)),
            None => {
                tracing::warn!(to = %request.to, "response lacked target rate");
                Err(ConversionError::ConversionUnavailable)
            }
        }
    }
}
