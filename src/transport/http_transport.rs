//! HTTP transport executing requests against the Tape API.
//!
//! This module provides the [`HttpTransport`] type that performs the actual
//! verb execution and header attachment for every resource method.

use std::collections::HashMap;

use serde_json::Value;

use crate::transport::errors::{ResponseError, TransportError};
use crate::transport::headers::HeaderChain;
use crate::transport::request::{HttpMethod, HttpRequest, RequestBody};
use crate::transport::response::HttpResponse;

/// Executes HTTP verbs against a base domain with a composed header set.
///
/// The transport is constructed once and shared (behind `Arc`) by the
/// [`Client`](crate::Client) and every resource handle it produces. It is
/// immutable after construction and safe to reuse across many sequential
/// calls; thread-safety of concurrent use is delegated to the underlying
/// reqwest client.
///
/// The transport performs no caching, retrying, or pagination. Each call maps
/// to exactly one request on the wire.
///
/// # Example
///
/// ```rust,ignore
/// use tape_api::transport::{build_headers, HttpTransport};
/// use tape_api::{BearerAuthorization, UserKey};
///
/// let auth = BearerAuthorization::new(UserKey::new("my-key")?);
/// let transport = HttpTransport::new("https://api.tapeapp.com", &build_headers(auth, None));
///
/// let record = transport.get("/v1/record/9590591").await?;
/// ```
#[derive(Debug)]
pub struct HttpTransport {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base domain, e.g. `https://api.tapeapp.com`.
    domain: String,
    /// Headers composed from the header chain, sent with every request.
    default_headers: HashMap<String, String>,
}

// Verify HttpTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpTransport>();
};

impl HttpTransport {
    /// Creates a transport for the given base domain and header chain.
    ///
    /// The chain is built once here; the resulting header set is attached to
    /// every request this transport sends.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g. TLS
    /// initialization failure).
    #[must_use]
    pub fn new(domain: impl Into<String>, headers: &HeaderChain) -> Self {
        let domain = domain.into();
        let domain = domain.trim_end_matches('/').to_string();

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            domain,
            default_headers: headers.build(),
        }
    }

    /// Returns the base domain for this transport.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Executes a request and parses the response.
    ///
    /// The response body is decoded as JSON; an empty body decodes to an
    /// empty object, and a non-JSON body is preserved under a `raw_body` key.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the request never completes and
    /// [`TransportError::Response`] for any non-2xx status, carrying the raw
    /// response body.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = format!("{}{}", self.domain, request.path);
        tracing::debug!(method = %request.method, %url, "dispatching request");

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }

        builder = match request.body {
            Some(RequestBody::Json(value)) => builder.json(&value),
            Some(RequestBody::Multipart { filename, data }) => {
                let part = reqwest::multipart::Part::bytes(data).file_name(filename.clone());
                let form = reqwest::multipart::Form::new()
                    .text("filename", filename)
                    .part("file", part);
                builder.multipart(form)
            }
            None => builder,
        };

        let res = builder.send().await?;
        let code = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();

        if !(200..300).contains(&code) {
            tracing::warn!(code, %url, "request failed");
            return Err(ResponseError {
                code,
                message: text,
            }
            .into());
        }

        let body = if text.is_empty() {
            Value::Object(serde_json::Map::new())
        } else {
            serde_json::from_str(&text).unwrap_or_else(|_| serde_json::json!({ "raw_body": text }))
        };

        Ok(HttpResponse::new(code, body))
    }

    /// Sends a GET request and returns the decoded body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure or non-2xx status.
    pub async fn get(&self, path: &str) -> Result<Value, TransportError> {
        self.request(HttpRequest::get(path))
            .await
            .map(|response| response.body)
    }

    /// Sends a POST request, optionally with a body, and returns the decoded
    /// response body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure or non-2xx status.
    pub async fn post(
        &self,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<Value, TransportError> {
        let mut request = HttpRequest::post(path);
        if let Some(body) = body {
            request = request.body(body);
        }
        self.request(request).await.map(|response| response.body)
    }

    /// Sends a PUT request with a body and returns the decoded response body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure or non-2xx status.
    pub async fn put(&self, path: &str, body: RequestBody) -> Result<Value, TransportError> {
        self.request(HttpRequest::put(path).body(body))
            .await
            .map(|response| response.body)
    }

    /// Sends a DELETE request and passes the successful response to `handler`,
    /// returning whatever it computes.
    ///
    /// The record delete path uses a handler that discards the body entirely;
    /// callers must not assume the service's delete response is inspectable.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure or non-2xx status; the
    /// handler is not invoked in either case.
    pub async fn delete_with<T>(
        &self,
        path: &str,
        handler: impl FnOnce(&HttpResponse) -> T,
    ) -> Result<T, TransportError> {
        let response = self.request(HttpRequest::delete(path)).await?;
        Ok(handler(&response))
    }
}
