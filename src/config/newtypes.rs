//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use std::fmt;

use crate::error::ConfigError;

/// A validated Tape user key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `UserKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use tape_api::UserKey;
///
/// let key = UserKey::new("my-user-key").unwrap();
/// assert_eq!(key.as_ref(), "my-user-key");
/// assert_eq!(format!("{key:?}"), "UserKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct UserKey(String);

impl UserKey {
    /// Creates a new validated user key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUserKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyUserKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for UserKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserKey(*****)")
    }
}

/// A validated API base domain.
///
/// Accepts any `http://` or `https://` URL; a trailing slash is stripped so
/// the domain can be concatenated directly with endpoint paths. Defaults to
/// the production host.
///
/// # Example
///
/// ```rust
/// use tape_api::ApiDomain;
///
/// let domain = ApiDomain::new("https://api.tapeapp.com/").unwrap();
/// assert_eq!(domain.as_ref(), "https://api.tapeapp.com");
///
/// assert_eq!(ApiDomain::default().as_ref(), "https://api.tapeapp.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiDomain(String);

impl ApiDomain {
    /// Creates a new validated API domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiDomain`] if the value is not an
    /// `http://` or `https://` URL with a non-empty host.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = domain.into();
        let trimmed = raw.trim().trim_end_matches('/').to_owned();

        let has_host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .is_some_and(|host| !host.is_empty());
        if has_host {
            Ok(Self(trimmed))
        } else {
            Err(ConfigError::InvalidApiDomain { domain: raw })
        }
    }
}

impl Default for ApiDomain {
    /// The production API host.
    fn default() -> Self {
        Self("https://api.tapeapp.com".to_owned())
    }
}

impl AsRef<str> for ApiDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
