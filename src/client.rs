//! The top-level API client.
//!
//! [`Client`] owns one [`HttpClient`] and hands out resource services that
//! borrow it.

use crate::clients::{HttpClient, HttpError};
use crate::config::CrmConfig;
use crate::services::ProductsService;

/// Entry point to the Base CRM API.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`; services borrowed from it can be used from
/// any task that holds a reference.
///
/// # Example
///
/// ```rust,ignore
/// use basecrm::{AccessToken, Client, CrmConfig};
///
/// let config = CrmConfig::builder()
///     .access_token(AccessToken::new(std::env::var("BASECRM_ACCESS_TOKEN")?)?)
///     .build()?;
/// let client = Client::new(config)?;
///
/// let product = client.products().find(1).await?;
/// ```
#[derive(Debug)]
pub struct Client {
    config: CrmConfig,
    http_client: HttpClient,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(config: CrmConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(&config)?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &CrmConfig {
        &self.config
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the products service.
    #[must_use]
    pub const fn products(&self) -> ProductsService<'_, HttpClient> {
        ProductsService::new(&self.http_client)
    }
}
