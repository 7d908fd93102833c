//! HTTP client for Base CRM API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Base CRM API.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::CrmConfig;

/// Every request path is prefixed with the API version.
pub const API_VERSION_PATH: &str = "/v2";

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Base CRM API.
///
/// The client handles:
/// - URL construction from the configured base URL and the `/v2` prefix
/// - Default headers including User-Agent and the bearer token
/// - Wrapping POST bodies in the `{"data": ...}` envelope
/// - Mapping non-2xx responses onto [`HttpError`] variants
///
/// Requests are attempted exactly once.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use basecrm::{AccessToken, CrmConfig};
/// use basecrm::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = CrmConfig::builder()
///     .access_token(AccessToken::new(token)?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/products").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.getbase.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &CrmConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}BaseCRM/v2 Rust/{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.access_token().as_ref()),
        );

        if !config.verify_ssl() {
            tracing::warn!(
                "TLS certificate verification is disabled for {}",
                config.base_url()
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(!config.verify_ssl())
            .build()?;

        Ok(Self {
            client,
            base_uri: config.base_url().as_ref().to_string(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL for an API path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{API_VERSION_PATH}{path}", self.base_uri)
    }

    /// Sends an HTTP request to the Base CRM API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`NotFound`, `Resource`, `Request`, `Server`)
    /// - A 2xx body is not valid JSON (`Decode`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!("Sending {} request to {}", request.http_method, request.path);

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        tracing::debug!(
            "Received {} from {} {}",
            code,
            request.http_method,
            request.path
        );

        if !(200..=299).contains(&code) {
            let request_id = res_headers
                .get("x-request-id")
                .and_then(|values| values.first())
                .map(String::as_str);
            return Err(HttpError::from_status(HttpResponseError::from_body(
                code, &body_text, request_id,
            )));
        }

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)?
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Transport for HttpClient {
    async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query);
        }
        self.request(builder.build()?).await
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(serde_json::json!({ "data": body }))
            .build()?;
        self.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ACCESS_TOKEN_LENGTH};

    fn test_token() -> String {
        "t".repeat(ACCESS_TOKEN_LENGTH)
    }

    fn create_test_config() -> CrmConfig {
        CrmConfig::builder()
            .access_token(AccessToken::new(test_token()).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_base_url() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(client.base_uri(), "https://api.getbase.com");
        assert_eq!(
            client.url_for("/products/1"),
            "https://api.getbase.com/v2/products/1"
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("BaseCRM/v2 Rust/"));
        assert!(user_agent.ends_with(SDK_VERSION));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = CrmConfig::builder()
            .access_token(AccessToken::new(test_token()).unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("BaseCRM/v2"));
    }

    #[test]
    fn test_bearer_token_header_injection() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&format!("Bearer {}", test_token()))
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[tokio::test]
    async fn test_invalid_path_is_rejected_before_sending() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let result = Transport::get(&client, "products", None).await;

        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(
                crate::clients::InvalidHttpRequestError::InvalidPath { .. }
            ))
        ));
    }
}
