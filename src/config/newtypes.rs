//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// Required length of a Base CRM personal access token.
pub const ACCESS_TOKEN_LENGTH: usize = 64;

/// A validated Base CRM access token.
///
/// The token must be non-empty, exactly 64 characters long, and contain no
/// whitespace. The `Debug` implementation masks the value so tokens do not
/// leak into logs.
///
/// # Example
///
/// ```rust
/// use basecrm::AccessToken;
///
/// let token = AccessToken::new("a".repeat(64)).unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAccessToken`] if the token is empty, or
    /// [`ConfigError::InvalidAccessToken`] if it contains whitespace or has
    /// the wrong length.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::MissingAccessToken);
        }
        if token.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidAccessToken {
                reason: "contains disallowed characters",
            });
        }
        if token.chars().count() != ACCESS_TOKEN_LENGTH {
            return Err(ConfigError::InvalidAccessToken {
                reason: "has invalid length",
            });
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated API base URL.
///
/// Accepts `http` and `https` URLs with a non-empty host. Trailing slashes
/// are stripped so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use basecrm::BaseUrl;
///
/// let url = BaseUrl::new("https://api.getbase.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.getbase.com");
/// assert_eq!(url.host_name(), "api.getbase.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The production Base CRM API endpoint.
    pub const PRODUCTION: &'static str = "https://api.getbase.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme, a
    /// scheme other than `http`/`https`, no host, or anything after the
    /// host other than a port.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start || remainder.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        // Only a port may follow the host; paths are appended per request.
        let after_host = &url[host_end..];
        let port_only = after_host.is_empty()
            || after_host
                .strip_prefix(':')
                .is_some_and(|port| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()));
        if !port_only {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::PRODUCTION.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: Self::PRODUCTION.len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
