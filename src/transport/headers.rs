//! Header composition for the transport layer.
//!
//! Headers are contributed by an ordered chain of layers rather than built in
//! one place. Each [`HeaderLayer`] adds its own key/value pairs to the set;
//! layers are applied in the order they were attached, and a later layer may
//! add to, but never removes, headers contributed by an earlier one.
//!
//! Order is significant: authorization is attached before the informational
//! layers (keep-alive, user-agent), so the transport always sees the full
//! header set before dispatch.
//!
//! # Example
//!
//! ```rust
//! use tape_api::transport::build_headers;
//! use tape_api::{BearerAuthorization, UserKey};
//!
//! let auth = BearerAuthorization::new(UserKey::new("my-key").unwrap());
//! let headers = build_headers(auth, Some("my-integration/1.0")).build();
//!
//! assert_eq!(headers.get("Authorization").unwrap(), "Bearer my-key");
//! assert_eq!(headers.get("Connection").unwrap(), "keep-alive");
//! assert_eq!(headers.get("User-Agent").unwrap(), "my-integration/1.0");
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::auth::Authorization;

/// A layer contributing header key/value pairs to the composed set.
pub trait HeaderLayer: Send + Sync {
    /// Adds this layer's headers to the set.
    ///
    /// Implementations insert their own keys and leave everything else
    /// untouched.
    fn apply(&self, headers: &mut HashMap<String, String>);
}

/// Layer contributing the `Authorization` header from a strategy.
pub struct AuthorizationHeaders<A> {
    auth: A,
}

impl<A: Authorization> AuthorizationHeaders<A> {
    /// Creates an authorization layer from the given strategy.
    #[must_use]
    pub const fn new(auth: A) -> Self {
        Self { auth }
    }
}

impl<A: Authorization> HeaderLayer for AuthorizationHeaders<A> {
    fn apply(&self, headers: &mut HashMap<String, String>) {
        headers.insert("Authorization".to_string(), self.auth.header_value());
    }
}

/// Layer contributing the `Connection: keep-alive` header.
pub struct KeepAliveHeaders;

impl HeaderLayer for KeepAliveHeaders {
    fn apply(&self, headers: &mut HashMap<String, String>) {
        headers.insert("Connection".to_string(), "keep-alive".to_string());
    }
}

/// Layer contributing the `User-Agent` header.
pub struct UserAgentHeaders {
    user_agent: String,
}

impl UserAgentHeaders {
    /// Creates a user-agent layer with the given value.
    #[must_use]
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl HeaderLayer for UserAgentHeaders {
    fn apply(&self, headers: &mut HashMap<String, String>) {
        headers.insert("User-Agent".to_string(), self.user_agent.clone());
    }
}

/// An ordered chain of header layers.
///
/// [`build`](Self::build) applies every layer in attachment order and returns
/// the resulting header map. Building is deterministic: the same chain always
/// produces the same set, with no hidden global state involved.
#[derive(Default)]
pub struct HeaderChain {
    layers: Vec<Box<dyn HeaderLayer>>,
}

impl HeaderChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Appends a layer to the chain.
    #[must_use]
    pub fn layer(mut self, layer: impl HeaderLayer + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    /// Applies all layers in order and returns the composed header map.
    #[must_use]
    pub fn build(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        for layer in &self.layers {
            layer.apply(&mut headers);
        }
        headers
    }
}

impl fmt::Debug for HeaderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderChain")
            .field("layers", &self.layers.len())
            .finish()
    }
}

/// Builds the standard header chain for a Tape transport.
///
/// Starts from authorization plus keep-alive; when a user-agent string is
/// supplied, a [`UserAgentHeaders`] layer is appended on top.
#[must_use]
pub fn build_headers(auth: impl Authorization + 'static, user_agent: Option<&str>) -> HeaderChain {
    let mut chain = HeaderChain::new()
        .layer(AuthorizationHeaders::new(auth))
        .layer(KeepAliveHeaders);
    if let Some(user_agent) = user_agent {
        chain = chain.layer(UserAgentHeaders::new(user_agent));
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::BearerAuthorization;
    use crate::config::UserKey;

    fn bearer(key: &str) -> BearerAuthorization {
        BearerAuthorization::new(UserKey::new(key).unwrap())
    }

    #[test]
    fn test_base_chain_has_authorization_and_keep_alive() {
        let headers = build_headers(bearer("key-1"), None).build();

        assert_eq!(headers.get("Authorization").unwrap(), "Bearer key-1");
        assert_eq!(headers.get("Connection").unwrap(), "keep-alive");
        assert!(!headers.contains_key("User-Agent"));
    }

    #[test]
    fn test_user_agent_layer_is_optional() {
        let headers = build_headers(bearer("key-1"), Some("acme/1.0")).build();
        assert_eq!(headers.get("User-Agent").unwrap(), "acme/1.0");
    }

    #[test]
    fn test_later_layer_keeps_earlier_headers() {
        let headers = build_headers(bearer("key-1"), Some("acme/1.0")).build();

        // The user-agent layer must not displace what came before it.
        assert_eq!(headers.len(), 3);
        assert!(headers.contains_key("Authorization"));
        assert!(headers.contains_key("Connection"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let chain = build_headers(bearer("key-1"), Some("acme/1.0"));
        assert_eq!(chain.build(), chain.build());
    }

    #[test]
    fn test_layers_apply_in_attachment_order() {
        struct Overwriting(&'static str);
        impl HeaderLayer for Overwriting {
            fn apply(&self, headers: &mut HashMap<String, String>) {
                headers.insert("X-Order".to_string(), self.0.to_string());
            }
        }

        let headers = HeaderChain::new()
            .layer(Overwriting("first"))
            .layer(Overwriting("second"))
            .build();
        assert_eq!(headers.get("X-Order").unwrap(), "second");
    }
}
