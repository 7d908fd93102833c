//! Error types for the Base CRM SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use basecrm::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::MissingAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No access token was provided.
    #[error("No access token provided. Set your access token during client initialization using: CrmConfig::builder().access_token(AccessToken::new(<YOUR_PERSONAL_ACCESS_TOKEN>)?)")]
    MissingAccessToken,

    /// The access token failed validation.
    #[error("Provided access token is invalid as it {reason}. Please double-check your access token.")]
    InvalidAccessToken {
        /// Why the token was rejected.
        reason: &'static str,
    },

    /// Base URL is invalid.
    #[error("Provided base url '{url}' is invalid as it is not a valid URI. Please make sure it includes the scheme part, both http and https are accepted, and the hostname part.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_access_token_error_message() {
        let message = ConfigError::MissingAccessToken.to_string();
        assert!(message.contains("No access token provided"));
    }

    #[test]
    fn test_invalid_access_token_includes_reason() {
        let error = ConfigError::InvalidAccessToken {
            reason: "contains disallowed characters",
        };
        let message = error.to_string();
        assert!(message.contains("contains disallowed characters"));
        assert!(message.contains("double-check"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://nope".to_string(),
        };
        assert!(error.to_string().contains("ftp://nope"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "access_token",
        };
        let message = error.to_string();
        assert!(message.contains("access_token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingAccessToken;
        let _: &dyn std::error::Error = &error;
    }
}
