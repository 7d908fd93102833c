//! Configuration types for the Base CRM SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Base CRM.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CrmConfig`]: The main configuration struct holding all SDK settings
//! - [`CrmConfigBuilder`]: A builder for constructing [`CrmConfig`] instances
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use basecrm::{AccessToken, CrmConfig};
//!
//! let config = CrmConfig::builder()
//!     .access_token(AccessToken::new("a".repeat(64)).unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl, ACCESS_TOKEN_LENGTH};

use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Base CRM SDK.
///
/// # Thread Safety
///
/// `CrmConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use basecrm::{AccessToken, BaseUrl, CrmConfig};
///
/// let config = CrmConfig::builder()
///     .access_token(AccessToken::new("a".repeat(64)).unwrap())
///     .base_url(BaseUrl::new("https://api.sandbox.getbase.com").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().host_name(), "api.sandbox.getbase.com");
/// ```
#[derive(Clone, Debug)]
pub struct CrmConfig {
    access_token: AccessToken,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Duration,
    verify_ssl: bool,
}

impl CrmConfig {
    /// Creates a new builder for constructing a `CrmConfig`.
    #[must_use]
    pub fn builder() -> CrmConfigBuilder {
        CrmConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns whether TLS certificates are verified.
    #[must_use]
    pub const fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }
}

// Verify CrmConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CrmConfig>();
};

/// Builder for constructing [`CrmConfig`] instances.
///
/// `access_token` is the only required field.
///
/// # Defaults
///
/// - `base_url`: `https://api.getbase.com`
/// - `user_agent_prefix`: `None`
/// - `timeout`: 30 seconds
/// - `verify_ssl`: `true`
#[derive(Debug, Default)]
pub struct CrmConfigBuilder {
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    verify_ssl: Option<bool>,
}

impl CrmConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables or disables TLS certificate verification.
    #[must_use]
    pub const fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = Some(verify);
        self
    }

    /// Builds the [`CrmConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<CrmConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        Ok(CrmConfig {
            access_token,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            verify_ssl: self.verify_ssl.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AccessToken {
        AccessToken::new("f".repeat(ACCESS_TOKEN_LENGTH)).unwrap()
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = CrmConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = CrmConfig::builder().access_token(token()).build().unwrap();

        assert_eq!(config.base_url().as_ref(), "https://api.getbase.com");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.verify_ssl());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let base_url = BaseUrl::new("http://localhost:3000").unwrap();

        let config = CrmConfig::builder()
            .access_token(token())
            .base_url(base_url.clone())
            .user_agent_prefix("MyApp/1.0")
            .timeout(Duration::from_secs(5))
            .verify_ssl(false)
            .build()
            .unwrap();

        assert_eq!(config.base_url(), &base_url);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(!config.verify_ssl());
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = CrmConfig::builder().access_token(token()).build().unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("CrmConfig"));
        assert!(!debug_str.contains(&"f".repeat(ACCESS_TOKEN_LENGTH)));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CrmConfig>();
    }
}
