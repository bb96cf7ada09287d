//! Transport-level error types.
//!
//! Two things can go wrong below the resource layer: the request never
//! completes ([`TransportError::Network`]) or the service answers with a
//! non-success status ([`TransportError::Response`]). Resource methods wrap
//! either into [`FailedRequest`](crate::resources::FailedRequest), preserving
//! the original cause.

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// Carries the HTTP status code and the raw response body for inspection.
#[derive(Debug, Error)]
#[error("unexpected status {code}: {message}")]
pub struct ResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
}

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum TransportError {
    /// A non-2xx response was received.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
