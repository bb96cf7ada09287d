//! Transport layer for Tape API communication.
//!
//! This module contains everything between a resource method and the wire:
//!
//! - **[`HeaderChain`]**: ordered composition of header-contributing layers
//!   (authorization, keep-alive, optional user-agent), assembled with
//!   [`build_headers`]
//! - **[`HttpRequest`] / [`HttpResponse`]**: verb, path and body descriptions
//!   and the parsed result
//! - **[`HttpTransport`]**: executes requests against the base domain with the
//!   composed headers
//! - **[`TransportError`]**: network failures and non-success responses
//!
//! Resource handles in [`crate::resources`] hold a shared reference to one
//! `HttpTransport` and delegate all execution to it.

mod errors;
mod headers;
mod http_transport;
mod request;
mod response;

pub use errors::{ResponseError, TransportError};
pub use headers::{
    build_headers, AuthorizationHeaders, HeaderChain, HeaderLayer, KeepAliveHeaders,
    UserAgentHeaders,
};
pub use http_transport::HttpTransport;
pub use request::{HttpMethod, HttpRequest, RequestBody};
pub use response::HttpResponse;
