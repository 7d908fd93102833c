//! # Base CRM API Rust SDK
//!
//! A Rust SDK for the Base CRM REST API (v2), providing type-safe
//! configuration, an async HTTP transport and typed resource services.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`CrmConfig`] and [`CrmConfigBuilder`]
//! - Validated newtypes for the access token and base URL
//! - An async HTTP client that maps API error envelopes onto [`HttpError`]
//! - A [`ProductsService`] for listing, fetching and creating products
//! - Lazy page-by-page iteration via [`PaginatedResource`]
//!
//! ## Quick Start
//!
//! ```rust
//! use basecrm::{AccessToken, CrmConfig};
//!
//! let config = CrmConfig::builder()
//!     .access_token(AccessToken::new("a".repeat(64)).unwrap())
//!     .user_agent_prefix("my-app/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.getbase.com");
//! ```
//!
//! ## Working with Products
//!
//! ```rust,ignore
//! use basecrm::{Client, Price, Product, ProductListParams};
//! use serde_json::json;
//!
//! let client = Client::new(config)?;
//! let products = client.products();
//!
//! // One page, filtered
//! let page = products
//!     .list(ProductListParams {
//!         ids: Some(vec![1, 2, 3]),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Every product, fetched lazily
//! let mut cursor = products.all().per_page(100).cursor();
//! while let Some(product) = cursor.next().await {
//!     println!("{:?}", product?.name);
//! }
//!
//! // Create from a typed product or from loose JSON
//! let created = products
//!     .create(json!({"name": "Support Plan", "sku": "SUP-1"}))
//!     .await?;
//! let fetched = products.find(created.id.unwrap()).await?;
//! ```
//!
//! ## Logging
//!
//! The SDK emits [`tracing`] events and never installs a subscriber.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Configuration and clients are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: Every call is a single request/response exchange

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use client::Client;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, BaseUrl, CrmConfig, CrmConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, Transport,
};

// Re-export resource types
pub use models::{Price, Product, ProductField, ProductInput, CREATABLE_FIELDS};
pub use services::{
    PaginatedResource, ProductListParams, ProductsService, ServiceError, SortBy, SortOrder,
};
