//! Error types for resource service operations.
//!
//! Local validation failures are raised before any request is made. Transport
//! failures are carried unchanged inside [`ServiceError::Http`], so callers
//! can still match on the exact [`HttpError`] variant.
//!
//! # Example
//!
//! ```rust,ignore
//! use basecrm::{HttpError, ServiceError};
//!
//! match client.products().find(123).await {
//!     Ok(product) => println!("Found: {:?}", product.name),
//!     Err(ServiceError::Http(HttpError::NotFound(e))) => println!("gone: {}", e.message),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::convert::Infallible;

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for resource service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The input was neither a typed resource nor a JSON object.
    #[error("Expected a resource or an attribute map, got {found}")]
    TypeMismatch {
        /// The JSON type that was supplied instead.
        found: &'static str,
    },

    /// One or more required attributes are absent from the input.
    #[error("One of required attributes is missing. Expected: {}", .expected.join(","))]
    MissingAttributes {
        /// All attributes that were required.
        expected: Vec<&'static str>,
        /// The attributes that were not present.
        missing: Vec<&'static str>,
    },

    /// A successful response did not carry the expected envelope member.
    #[error("Response body is missing the '{key}' envelope member")]
    MissingEnvelope {
        /// The envelope key that was expected (`data` or `items`).
        key: &'static str,
    },

    /// A payload could not be converted to or from its typed form.
    #[error("Failed to convert resource payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A transport-level error, passed through untouched.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl From<Infallible> for ServiceError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

// Verify ServiceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ServiceError>();
};
