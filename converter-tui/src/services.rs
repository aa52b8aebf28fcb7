//! Service layer adapter for the TUI
//!
//! Bridges the async ConversionService to the synchronous event loop:
//! a tokio runtime owned here runs one task per conversion, and the outcome
//! comes back over a crossbeam channel polled each loop iteration.

use std::sync::Arc;

use crossbeam_channel::{Receiver, bounded};

use converter_client::RatesClient;
use converter_core::ConversionService;
use converter_types::{Conversion, ConversionError, ConversionRequest};

use crate::error::{Result, TuiError};

/// Outcome of one conversion attempt, as delivered to the event loop.
pub type ConvertOutcome = std::result::Result<Conversion, ConversionError>;

/// Service handle for TUI operations
///
/// Wraps the conversion service and manages the tokio runtime so the UI
/// thread never blocks on the network.
pub struct ServiceHandle {
    service: Arc<ConversionService<RatesClient>>,
    runtime: tokio::runtime::Runtime,
}

impl ServiceHandle {
    /// Create a new service handle against the given rate-service base URL.
    pub fn new(api_url: &str) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new().map_err(TuiError::Terminal)?;
        let service = ConversionService::new(RatesClient::new(api_url));

        Ok(Self {
            service: Arc::new(service),
            runtime,
        })
    }

    /// Start one conversion attempt.
    ///
    /// Returns immediately with a receiver that will yield exactly one
    /// outcome. There is no cancellation: dropping the receiver just means
    /// the outcome is discarded when the task completes.
    pub fn convert(&self, request: ConversionRequest) -> Receiver<ConvertOutcome> {
        let (tx, rx) = bounded(1);
        let service = Arc::clone(&self.service);

        self.runtime.spawn(async move {
            let outcome = service.convert(request).await;
            match &outcome {
                Ok(conversion) => tracing::info!(result = %conversion, "conversion succeeded"),
                Err(e) => tracing::warn!(error = %e, "conversion failed"),
            }
            // Receiver may be gone if the app quit mid-flight.
            let _ = tx.send(outcome);
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use converter_types::Currency;
    use std::time::Duration;

    #[test]
    fn test_unreachable_service_reports_network_failure() {
        // Nothing listens on this port; the transport error must surface as
        // the fixed NetworkFailure kind, not a panic or a hang.
        let services = ServiceHandle::new("http://127.0.0.1:9").unwrap();
        let rx = services.convert(ConversionRequest {
            amount: 1.0,
            from: Currency::USD,
            to: Currency::INR,
        });

        let outcome = rx
            .recv_timeout(Duration::from_secs(30))
            .expect("outcome should arrive");
        assert_eq!(outcome.unwrap_err(), ConversionError::NetworkFailure);
    }
}
