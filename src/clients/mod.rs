//! HTTP client types for Base CRM API communication.
//!
//! This module provides the transport layer used by the resource services.
//! It handles request/response processing, the Base API envelope, and status
//! code to error mapping.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: The `get`/`post` seam resource services are written against
//! - [`HttpClient`]: The reqwest-backed [`Transport`] implementation
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`HttpError`]: Unified error type for transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use basecrm::{AccessToken, CrmConfig};
//! use basecrm::clients::{HttpClient, Transport};
//!
//! let config = CrmConfig::builder()
//!     .access_token(AccessToken::new(token)?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let response = client.get("/products/1", None).await?;
//! println!("Product: {}", response.body["data"]);
//! ```
//!
//! # Retry Behavior
//!
//! Requests are attempted once. Failures are returned to the caller as-is.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{ApiErrorDetail, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_VERSION_PATH, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::Transport;
