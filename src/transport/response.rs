//! HTTP response types for the transport layer.

use serde_json::Value;

/// A parsed HTTP response.
///
/// The body is the decoded JSON document; an empty response body decodes to
/// an empty object. Only the delete path ever inspects a response through a
/// handler; everything else consumes `body` directly.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The decoded response body.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a response from a status code and decoded body.
    #[must_use]
    pub fn new(code: u16, body: Value) -> Self {
        Self { code, body }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }
}
