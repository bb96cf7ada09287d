//! Authorization strategies for the Tape API.
//!
//! An [`Authorization`] produces the value of the `Authorization` header from
//! a credential. Strategies are immutable once constructed; the transport
//! layer queries them exactly once when the header chain is built, so a
//! strategy must return the same value for its whole lifetime.
//!
//! The Tape public API authenticates with a static bearer user key, provided
//! by [`BearerAuthorization`]. Other schemes can be plugged in by implementing
//! the trait.

use crate::config::UserKey;

/// A strategy producing the `Authorization` header value.
pub trait Authorization: Send + Sync {
    /// Returns the full value for the `Authorization` header.
    fn header_value(&self) -> String;
}

/// Bearer-token authorization from a Tape user key.
///
/// # Example
///
/// ```rust
/// use tape_api::{Authorization, BearerAuthorization, UserKey};
///
/// let auth = BearerAuthorization::new(UserKey::new("my-user-key").unwrap());
/// assert_eq!(auth.header_value(), "Bearer my-user-key");
/// ```
#[derive(Clone, Debug)]
pub struct BearerAuthorization {
    user_key: UserKey,
}

impl BearerAuthorization {
    /// Creates a bearer authorization from a validated user key.
    #[must_use]
    pub const fn new(user_key: UserKey) -> Self {
        Self { user_key }
    }
}

impl Authorization for BearerAuthorization {
    fn header_value(&self) -> String {
        format!("Bearer {}", self.user_key.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_value() {
        let auth = BearerAuthorization::new(UserKey::new("abc123").unwrap());
        assert_eq!(auth.header_value(), "Bearer abc123");
    }

    #[test]
    fn test_header_value_is_stable() {
        let auth = BearerAuthorization::new(UserKey::new("abc123").unwrap());
        assert_eq!(auth.header_value(), auth.header_value());
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let auth = BearerAuthorization::new(UserKey::new("super-secret").unwrap());
        assert!(!format!("{auth:?}").contains("super-secret"));
    }
}
