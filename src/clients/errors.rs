//! HTTP-specific error types for the Base CRM SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors and request validation failures.
//!
//! # Error Handling
//!
//! The transport maps response status codes onto [`HttpError`] variants:
//!
//! - **404**: [`HttpError::NotFound`]
//! - **422**: [`HttpError::Resource`] (the API rejected the payload)
//! - **Other 4xx**: [`HttpError::Request`]
//! - **5xx**: [`HttpError::Server`]
//!
//! # Example
//!
//! ```rust,ignore
//! use basecrm::clients::{HttpError, Transport};
//!
//! match client.get("/products/1", None).await {
//!     Ok(response) => println!("Product: {}", response.body),
//!     Err(HttpError::NotFound(e)) => println!("missing: {}", e.message),
//!     Err(HttpError::Resource(e)) => {
//!         for error in &e.errors {
//!             println!("{:?}: {:?}", error.code, error.message);
//!         }
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

/// A single entry in the `errors` array of a Base API error envelope.
///
/// ```json
/// {
///   "errors": [
///     { "error": { "code": "not_found", "message": "...", "details": "..." } }
///   ],
///   "meta": { "type": "errors", "logref": "abc-123" }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g. `not_found`, `blank`).
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable error message.
    #[serde(default)]
    pub message: Option<String>,
    /// Further details about the error.
    #[serde(default)]
    pub details: Option<String>,
}

/// Error returned when an HTTP request receives a non-successful response.
///
/// # Example
///
/// ```rust
/// use basecrm::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "not_found: The requested resource was not found".to_string(),
///     errors: Vec::new(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Summary of the error, built from the error envelope.
    pub message: String,
    /// All error entries from the response body.
    pub errors: Vec<ApiErrorDetail>,
    /// Reference ID for error reporting (`meta.logref` or `X-Request-Id`).
    pub error_reference: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ErrorItem>,
    #[serde(default)]
    meta: Option<ErrorMeta>,
}

#[derive(Deserialize)]
struct ErrorItem {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ErrorMeta {
    #[serde(default)]
    logref: Option<String>,
}

impl HttpResponseError {
    /// Builds an error from a status code and the raw response body.
    ///
    /// Bodies in the Base error envelope format are parsed into
    /// [`ApiErrorDetail`] entries. Anything else is kept verbatim as the
    /// message.
    #[must_use]
    pub fn from_body(code: u16, body: &str, request_id: Option<&str>) -> Self {
        let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();
        let logref = envelope
            .as_ref()
            .and_then(|e| e.meta.as_ref())
            .and_then(|m| m.logref.clone());
        let errors: Vec<ApiErrorDetail> = envelope
            .map(|e| e.errors.into_iter().map(|item| item.error).collect())
            .unwrap_or_default();

        let message = if errors.is_empty() {
            if body.trim().is_empty() {
                "empty response body".to_string()
            } else {
                body.to_string()
            }
        } else {
            errors
                .iter()
                .map(|e| match (&e.code, &e.message) {
                    (Some(code), Some(message)) => format!("{code}: {message}"),
                    (Some(code), None) => code.clone(),
                    (None, Some(message)) => message.clone(),
                    (None, None) => "unknown error".to_string(),
                })
                .collect::<Vec<_>>()
                .join("; ")
        };

        Self {
            code,
            message,
            errors,
            error_reference: logref.or_else(|| request_id.map(String::from)),
        }
    }
}

/// Error returned when an HTTP request fails validation before it is sent.
///
/// # Example
///
/// ```rust
/// use basecrm::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty or not rooted at `/`.
    #[error("Invalid request path '{path}'. Paths must start with '/'.")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use basecrm::HttpError;
///
/// match result {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::NotFound(e)) => { /* 404 */ }
///     Err(HttpError::Resource(e)) => { /* 422 validation errors */ }
///     Err(HttpError::Request(e)) => { /* other 4xx */ }
///     Err(HttpError::Server(e)) => { /* 5xx */ }
///     Err(HttpError::Decode(e)) => { /* malformed 2xx body */ }
///     Err(HttpError::InvalidRequest(e)) => { /* rejected before sending */ }
///     Err(HttpError::Network(e)) => { /* connectivity */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// The requested resource does not exist (HTTP 404).
    #[error("Resource not found: {0}")]
    NotFound(HttpResponseError),

    /// The API rejected the submitted resource (HTTP 422).
    #[error("Resource rejected: {0}")]
    Resource(HttpResponseError),

    /// Any other client error (HTTP 4xx).
    #[error("Request error: {0}")]
    Request(HttpResponseError),

    /// The API failed to process the request (HTTP 5xx).
    #[error("Server error: {0}")]
    Server(HttpResponseError),

    /// A successful response carried a body that is not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Classifies a non-2xx response into the matching variant.
    #[must_use]
    pub fn from_status(error: HttpResponseError) -> Self {
        match error.code {
            404 => Self::NotFound(error),
            422 => Self::Resource(error),
            500..=599 => Self::Server(error),
            _ => Self::Request(error),
        }
    }

    /// Returns the response details for status-derived errors.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::NotFound(e) | Self::Resource(e) | Self::Request(e) | Self::Server(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status code for status-derived errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response().map(|e| e.code)
    }
}
