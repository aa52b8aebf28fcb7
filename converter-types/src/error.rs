//! Error types for the conversion workflow.

/// Terminal outcome of a failed conversion attempt.
///
/// Both kinds surface a fixed user-facing message and clear any prior
/// result; neither is retried. The Display strings ARE the UI copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The transport or JSON-decoding step failed.
    #[error("Error fetching rates.")]
    NetworkFailure,

    /// The response parsed but lacked the requested target-currency rate.
    #[error("Conversion failed.")]
    ConversionUnavailable,
}

/// Error type for rate-provider adapters.
///
/// Adapters map their transport errors into this; the workflow collapses
/// every variant into [`ConversionError::NetworkFailure`].
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),
}
