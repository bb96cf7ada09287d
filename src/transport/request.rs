//! HTTP request types for the transport layer.

use std::fmt;

use serde_json::Value;

/// HTTP methods used by the Tape API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request body together with its wire format.
///
/// The body variant determines the content type, so a body can never be sent
/// with a mismatched `Content-Type` header.
#[derive(Clone, Debug)]
pub enum RequestBody {
    /// A JSON document, sent as `application/json`.
    Json(Value),
    /// A file upload, sent as `multipart/form-data` with a `filename` text
    /// field and a `file` part.
    Multipart {
        /// The name the service should store the file under.
        filename: String,
        /// The raw file contents.
        data: Vec<u8>,
    },
}

impl RequestBody {
    /// Returns the MIME type this body is sent as.
    ///
    /// For multipart bodies the boundary parameter is appended by the HTTP
    /// stack at send time.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Multipart { .. } => "multipart/form-data",
        }
    }
}

/// An HTTP request to be executed by the transport.
///
/// The path already contains any encoded options query string; the transport
/// only prepends the base domain.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The path relative to the base domain, e.g. `/v1/record/123`.
    pub path: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    /// Creates a request with no body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST request; attach a body with [`body`](Self::body).
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Creates a PUT request; attach a body with [`body`](Self::body).
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }
}
