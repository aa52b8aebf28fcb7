//! Rate-conversion service port.
//!
//! This trait defines the interface for exchange rate services.
//! Implementations can be HTTP clients, mock providers, etc.

use crate::domain::Currency;
use crate::dto::RatesResponse;
use crate::error::ProviderError;

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the rate table for converting `amount` of `from` into `to`.
    ///
    /// The returned table may or may not contain an entry for `to`;
    /// interpreting that is the workflow's job, not the adapter's.
    async fn fetch_rates(
        &self,
        amount: f64,
        from: Currency,
        to: Currency,
    ) -> Result<RatesResponse, ProviderError>;
}
