//! The transport seam between resource services and the HTTP layer.

use std::collections::HashMap;

use crate::clients::{HttpError, HttpResponse};

/// Performs GET and POST exchanges against the API.
///
/// Resource services only depend on this trait, so they can run against
/// [`HttpClient`](crate::clients::HttpClient) in production and an in-memory
/// implementation in tests.
///
/// Implementations own the wire conventions: the `/v2` prefix, wrapping POST
/// bodies in the `{"data": ...}` envelope, and mapping non-2xx statuses onto
/// [`HttpError`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a GET request to `path` with optional query parameters.
    async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError>;

    /// Sends a POST request to `path` with `body` as the envelope payload.
    async fn post(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, HttpError>;
}
