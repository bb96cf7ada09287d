//! The Tape API client and its resource registry.
//!
//! A [`Client`] owns one shared [`HttpTransport`] and hands out stateless
//! resource handles bound to it. The set of resources is closed and
//! enumerable: [`ResourceKind`] lists every kind the client knows, and
//! [`Client::resolve`] turns a name into a handle or fails with
//! [`UnknownResourceError`].
//!
//! # Example
//!
//! ```rust
//! use tape_api::{Client, ResourceKind, UserKey};
//!
//! let client = Client::bearer(UserKey::new("my-user-key").unwrap());
//!
//! // Typed access
//! let _record = client.record();
//!
//! // Name-based access, e.g. for tooling
//! let resource = client.resolve("Record").unwrap();
//! assert_eq!(resource.kind(), ResourceKind::Record);
//!
//! // Introspection
//! assert_eq!(ResourceKind::names(), ["Record", "App", "Workspace", "File"]);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::auth::{Authorization, BearerAuthorization};
use crate::config::{TapeConfig, UserKey};
use crate::resources::{App, File, Record, Workspace};
use crate::transport::{build_headers, HttpTransport};

/// The closed set of resource kinds known to the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Record endpoints (`/v1/record/...`).
    Record,
    /// App endpoints (`/v1/app/...`).
    App,
    /// Workspace endpoints (`/v1/workspace/...`).
    Workspace,
    /// File endpoints (`/v1/file/...`).
    File,
}

impl ResourceKind {
    /// Every known resource kind, in declaration order.
    pub const ALL: [Self; 4] = [Self::Record, Self::App, Self::Workspace, Self::File];

    /// Returns the kind's resolvable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Record => "Record",
            Self::App => "App",
            Self::Workspace => "Workspace",
            Self::File => "File",
        }
    }

    /// Lists the names of every known resource kind.
    #[must_use]
    pub fn names() -> [&'static str; 4] {
        [
            Self::Record.name(),
            Self::App.name(),
            Self::Workspace.name(),
            Self::File.name(),
        ]
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Record" => Ok(Self::Record),
            "App" => Ok(Self::App),
            "Workspace" => Ok(Self::Workspace),
            "File" => Ok(Self::File),
            _ => Err(UnknownResourceError {
                name: s.to_string(),
            }),
        }
    }
}

/// Error returned when resolving a name outside the known resource set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown resource '{name}'; known resources are Record, App, Workspace and File")]
pub struct UnknownResourceError {
    /// The name that failed to resolve.
    pub name: String,
}

/// A resource handle resolved by name.
///
/// Wraps one of the concrete handle types; match on it to reach the endpoint
/// methods.
#[derive(Clone, Debug)]
pub enum AnyResource {
    /// A [`Record`] handle.
    Record(Record),
    /// An [`App`] handle.
    App(App),
    /// A [`Workspace`] handle.
    Workspace(Workspace),
    /// A [`File`] handle.
    File(File),
}

impl AnyResource {
    /// Returns the kind of the wrapped handle.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Record(_) => ResourceKind::Record,
            Self::App(_) => ResourceKind::App,
            Self::Workspace(_) => ResourceKind::Workspace,
            Self::File(_) => ResourceKind::File,
        }
    }

    /// Returns the transport the wrapped handle is bound to.
    #[must_use]
    pub const fn transport(&self) -> &Arc<HttpTransport> {
        match self {
            Self::Record(resource) => resource.transport(),
            Self::App(resource) => resource.transport(),
            Self::Workspace(resource) => resource.transport(),
            Self::File(resource) => resource.transport(),
        }
    }
}

/// The Tape API client.
///
/// Owns the shared transport; every handle it produces — whether through the
/// typed accessors or [`resolve`](Self::resolve) — is freshly constructed but
/// bound to the exact same transport object, so connection reuse and
/// authorization stay consistent across resources.
///
/// The client is immutable after construction and cheap to clone (clones
/// share the transport).
#[derive(Clone, Debug)]
pub struct Client {
    transport: Arc<HttpTransport>,
}

impl Client {
    /// Creates a client around an existing transport.
    #[must_use]
    pub fn new(transport: HttpTransport) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Creates a client for the production API using bearer authorization.
    #[must_use]
    pub fn bearer(user_key: UserKey) -> Self {
        Self::authorizing(&TapeConfig::default(), BearerAuthorization::new(user_key))
    }

    /// Creates a client from a configuration and an authorization strategy.
    #[must_use]
    pub fn authorizing(config: &TapeConfig, auth: impl Authorization + 'static) -> Self {
        let headers = build_headers(auth, config.user_agent());
        Self::new(HttpTransport::new(config.domain().as_ref(), &headers))
    }

    /// Returns the shared transport.
    #[must_use]
    pub const fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    /// Returns a fresh [`Record`] handle bound to the shared transport.
    #[must_use]
    pub fn record(&self) -> Record {
        Record::new(Arc::clone(&self.transport))
    }

    /// Returns a fresh [`App`] handle bound to the shared transport.
    #[must_use]
    pub fn app(&self) -> App {
        App::new(Arc::clone(&self.transport))
    }

    /// Returns a fresh [`Workspace`] handle bound to the shared transport.
    #[must_use]
    pub fn workspace(&self) -> Workspace {
        Workspace::new(Arc::clone(&self.transport))
    }

    /// Returns a fresh [`File`] handle bound to the shared transport.
    #[must_use]
    pub fn file(&self) -> File {
        File::new(Arc::clone(&self.transport))
    }

    /// Returns a fresh handle for the given kind.
    #[must_use]
    pub fn for_kind(&self, kind: ResourceKind) -> AnyResource {
        match kind {
            ResourceKind::Record => AnyResource::Record(self.record()),
            ResourceKind::App => AnyResource::App(self.app()),
            ResourceKind::Workspace => AnyResource::Workspace(self.workspace()),
            ResourceKind::File => AnyResource::File(self.file()),
        }
    }

    /// Resolves a resource name to a fresh handle.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownResourceError`] when `name` is not one of
    /// [`ResourceKind::names`].
    pub fn resolve(&self, name: &str) -> Result<AnyResource, UnknownResourceError> {
        let kind = name.parse::<ResourceKind>()?;
        Ok(self.for_kind(kind))
    }
}
