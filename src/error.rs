//! Error types for SDK configuration.
//!
//! This module contains the error type used by configuration constructors.
//! Transport and resource errors live next to the code that produces them,
//! in [`crate::transport`] and [`crate::resources`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use tape_api::{ConfigError, UserKey};
//!
//! let result = UserKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUserKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// User key cannot be empty.
    #[error("User key cannot be empty. Please provide a valid Tape user key.")]
    EmptyUserKey,

    /// API domain is invalid.
    #[error("Invalid API domain '{domain}'. Expected an http(s) URL such as 'https://api.tapeapp.com'.")]
    InvalidApiDomain {
        /// The invalid domain that was provided.
        domain: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_user_key_error_message() {
        let error = ConfigError::EmptyUserKey;
        let message = error.to_string();
        assert!(message.contains("User key cannot be empty"));
    }

    #[test]
    fn test_invalid_api_domain_error_message() {
        let error = ConfigError::InvalidApiDomain {
            domain: "not-a-url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not-a-url"));
        assert!(message.contains("https://api.tapeapp.com"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyUserKey;
        let _: &dyn std::error::Error = &error;
    }
}
