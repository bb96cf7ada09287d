//! # Tape API Rust SDK
//!
//! A Rust SDK for the [Tape](https://tapeapp.com) API, providing object-style
//! access to records, apps, workspaces and files without hand-built URLs,
//! headers, or query strings.
//!
//! ## Overview
//!
//! This SDK provides:
//! - A layered transport with composable header contributions via [`HeaderChain`]
//! - Bearer-token authorization via [`BearerAuthorization`]
//! - A closed resource registry on [`Client`] with name-based resolution
//! - Stateless resource handles ([`Record`], [`App`], [`Workspace`], [`File`])
//!   that all share one transport
//! - Uniform request options with default-suppression encoding via
//!   [`RequestOptions`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use serde_json::json;
//! use tape_api::{Client, RequestOptions, UserKey};
//!
//! let client = Client::bearer(UserKey::new("your-user-key")?);
//!
//! // Retrieve a record
//! let record = client.record().find(9_590_591).await?;
//!
//! // Create a record
//! let created = client
//!     .record()
//!     .create(1234, &json!({"fields": {"title": "Title"}}), RequestOptions::new())
//!     .await?;
//!
//! // Delete a record. It doesn't return anything.
//! client.record().delete(555, RequestOptions::new()).await?;
//!
//! // Retrieve records for an app, two at a time
//! let options = RequestOptions::new().param("limit", 2).param("sort_desc", true);
//! let records = client.app().get_records(1234, options).await?;
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust,ignore
//! use tape_api::{ApiDomain, BearerAuthorization, Client, TapeConfig, UserKey};
//!
//! let config = TapeConfig::builder()
//!     .domain(ApiDomain::new("https://api.staging.tapeapp.com")?)
//!     .user_agent("my-integration/1.0")
//!     .build();
//!
//! let auth = BearerAuthorization::new(UserKey::new("your-user-key")?);
//! let client = Client::authorizing(&config, auth);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: credentials, domains and payloads are validated
//!   before any network I/O
//! - **Shared transport**: every resource handle resolved from one [`Client`]
//!   shares the exact same underlying transport
//! - **Pass-through bodies**: responses are decoded to [`serde_json::Value`];
//!   the SDK imposes no schema on payloads
//! - **Thread-safe**: all shared types are `Send + Sync`

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod transport;

// Re-export public types at crate root for convenience
pub use auth::{Authorization, BearerAuthorization};
pub use client::{AnyResource, Client, ResourceKind, UnknownResourceError};
pub use config::{ApiDomain, TapeConfig, TapeConfigBuilder, UserKey};
pub use error::ConfigError;
pub use resources::{
    sanitize_id, ApiError, App, FailedRequest, File, Record, RequestOptions, ValidationError,
    Workspace,
};
pub use transport::{
    build_headers, HeaderChain, HeaderLayer, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
    RequestBody, ResponseError, TransportError,
};
