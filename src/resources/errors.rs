//! Resource-level error types.
//!
//! # Error Handling
//!
//! Endpoint methods fail in exactly two ways:
//!
//! - [`ValidationError`]: the payload was rejected client-side, before any
//!   network I/O
//! - [`FailedRequest`]: the transport reported a failure (network error or
//!   non-2xx status), with the original cause attached
//!
//! Errors are never swallowed and nothing is retried; the one intentional
//! exception is the delete path's discarded success body.
//!
//! # Example
//!
//! ```rust,ignore
//! use tape_api::{ApiError, RequestOptions};
//!
//! match client.record().create(1234, &payload, RequestOptions::new()).await {
//!     Ok(record) => println!("created: {record}"),
//!     Err(ApiError::Validation(e)) => println!("bad payload: {e}"),
//!     Err(ApiError::Failed(e)) => println!("request failed: {:?}", e.cause()),
//! }
//! ```

use thiserror::Error;

use crate::transport::TransportError;

/// Error returned when a write payload is rejected before any request is
/// issued.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The payload serialized to something other than a JSON object.
    #[error("payload must be a JSON object, got {found}")]
    NotAnObject {
        /// What the payload serialized to instead.
        found: &'static str,
    },

    /// The payload could not be serialized at all.
    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Error returned when the transport reported a failure.
///
/// Wraps the underlying [`TransportError`] and keeps it reachable both via
/// [`cause`](Self::cause) and through [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("request failed: {source}")]
pub struct FailedRequest {
    #[from]
    source: TransportError,
}

impl FailedRequest {
    /// Creates a failed request from its transport-level cause.
    #[must_use]
    pub const fn new(source: TransportError) -> Self {
        Self { source }
    }

    /// Returns the original transport error for inspection.
    #[must_use]
    pub const fn cause(&self) -> &TransportError {
        &self.source
    }
}

/// Unified error type for resource endpoint methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The payload failed client-side validation; no request was issued.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The transport reported a failure.
    #[error(transparent)]
    Failed(#[from] FailedRequest),
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        Self::Failed(FailedRequest::new(error))
    }
}
