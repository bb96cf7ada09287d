//! Configuration types for the Tape API SDK.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`TapeConfig`]: SDK settings (base domain, optional user agent)
//! - [`TapeConfigBuilder`]: a builder for constructing [`TapeConfig`] instances
//! - [`UserKey`]: a validated user key newtype with masked debug output
//! - [`ApiDomain`]: a validated API base domain
//!
//! # Example
//!
//! ```rust
//! use tape_api::{ApiDomain, TapeConfig};
//!
//! let config = TapeConfig::builder()
//!     .domain(ApiDomain::new("https://api.staging.tapeapp.com").unwrap())
//!     .user_agent("my-integration/1.0")
//!     .build();
//!
//! assert_eq!(config.user_agent(), Some("my-integration/1.0"));
//! ```

mod newtypes;

pub use newtypes::{ApiDomain, UserKey};

/// Configuration for the Tape API SDK.
///
/// Holds the base domain requests are sent to and an optional user-agent
/// string advertised with every request. The default configuration points at
/// the production host with no user agent.
///
/// # Thread Safety
///
/// `TapeConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TapeConfig {
    domain: ApiDomain,
    user_agent: Option<String>,
}

impl TapeConfig {
    /// Creates a new builder for constructing a `TapeConfig`.
    #[must_use]
    pub fn builder() -> TapeConfigBuilder {
        TapeConfigBuilder::default()
    }

    /// Returns the API base domain.
    #[must_use]
    pub const fn domain(&self) -> &ApiDomain {
        &self.domain
    }

    /// Returns the user-agent string, if one was configured.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

/// Builder for constructing [`TapeConfig`] instances.
///
/// Every field has a sensible default, so [`build`](Self::build) is
/// infallible.
#[derive(Debug, Default)]
pub struct TapeConfigBuilder {
    domain: Option<ApiDomain>,
    user_agent: Option<String>,
}

impl TapeConfigBuilder {
    /// Sets the API base domain. Defaults to the production host.
    #[must_use]
    pub fn domain(mut self, domain: ApiDomain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets the user-agent string sent with every request.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the [`TapeConfig`].
    #[must_use]
    pub fn build(self) -> TapeConfig {
        TapeConfig {
            domain: self.domain.unwrap_or_default(),
            user_agent: self.user_agent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_production() {
        let config = TapeConfig::default();
        assert_eq!(config.domain().as_ref(), "https://api.tapeapp.com");
        assert!(config.user_agent().is_none());
    }

    #[test]
    fn test_builder_overrides_domain() {
        let config = TapeConfig::builder()
            .domain(ApiDomain::new("https://api.staging.tapeapp.com").unwrap())
            .build();
        assert_eq!(config.domain().as_ref(), "https://api.staging.tapeapp.com");
    }

    #[test]
    fn test_builder_sets_user_agent() {
        let config = TapeConfig::builder().user_agent("acme-sync/2.3").build();
        assert_eq!(config.user_agent(), Some("acme-sync/2.3"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TapeConfig>();
    }
}
