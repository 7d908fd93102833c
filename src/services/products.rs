//! The products resource service.
//!
//! [`ProductsService`] wraps a [`Transport`] and exposes the product
//! catalog operations of the Base CRM API:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`all`](ProductsService::all) | `GET /products` per page, lazily |
//! | [`list`](ProductsService::list) | `GET /products` |
//! | [`find`](ProductsService::find) | `GET /products/{id}` |
//! | [`create`](ProductsService::create) | `POST /products` |
//!
//! # Example
//!
//! ```rust,ignore
//! use basecrm::{Price, Product, ProductListParams, SortBy};
//!
//! let products = client.products();
//!
//! let active = products
//!     .list(ProductListParams {
//!         confirmed: Some(true),
//!         sort_by: Some(SortBy::desc("created_at")),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let created = products
//!     .create(Product {
//!         name: Some("Enterprise Plan".to_string()),
//!         prices: Some(vec![Price::new("EUR", "1000.00")]),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("Created product {:?}", created.id);
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::clients::Transport;
use crate::models::{Product, ProductInput};
use crate::services::pagination::{PageFetcher, PageParams, PaginatedResource};
use crate::services::ServiceError;

const PRODUCTS_PATH: &str = "/products";

/// Sort direction for [`SortBy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending (the API default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// The `sort_by` query option, rendered as `field:asc` or `field:desc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBy {
    /// The attribute to sort on.
    pub field: String,
    /// The direction.
    pub order: SortOrder,
}

impl SortBy {
    /// Sorts ascending on `field`.
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Asc,
        }
    }

    /// Sorts descending on `field`.
    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Desc,
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.order {
            SortOrder::Asc => write!(f, "{}:asc", self.field),
            SortOrder::Desc => write!(f, "{}:desc", self.field),
        }
    }
}

fn serialize_sort_by<S: Serializer>(
    value: &Option<SortBy>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(sort_by) => serializer.collect_str(sort_by),
        None => serializer.serialize_none(),
    }
}

/// Query options for listing products.
///
/// Unset options are not sent; the server defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductListParams {
    /// Only products that are (or are not) confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,

    /// Products with these IDs. Sent as a comma-separated list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Products with exactly this name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Page size. The server defaults to 25 and caps it at 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Sort order. The server defaults to `id:asc`.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_sort_by"
    )]
    pub sort_by: Option<SortBy>,
}

impl ProductListParams {
    /// Renders the set options as query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Decode`] if the params cannot be serialized.
    pub fn to_query(&self) -> Result<HashMap<String, String>, ServiceError> {
        serialize_to_query(self)
    }
}

impl PageParams for ProductListParams {
    fn page(&self) -> Option<u32> {
        self.page
    }

    fn per_page(&self) -> Option<u32> {
        self.per_page
    }

    fn set_page(&mut self, page: u32) {
        self.page = Some(page);
    }

    fn set_per_page(&mut self, per_page: u32) {
        self.per_page = Some(per_page);
    }
}

/// Converts a serializable params struct into a flat query map.
///
/// `null` values are skipped and arrays are joined with commas.
fn serialize_to_query<T: Serialize>(params: &T) -> Result<HashMap<String, String>, ServiceError> {
    let mut query = HashMap::new();

    if let Value::Object(map) = serde_json::to_value(params)? {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                other => {
                    query.insert(key, other.to_string());
                }
            }
        }
    }

    Ok(query)
}

/// Removes `key` from a response envelope.
fn unwrap_envelope(body: Value, key: &'static str) -> Result<Value, ServiceError> {
    match body {
        Value::Object(mut map) => map
            .remove(key)
            .ok_or(ServiceError::MissingEnvelope { key }),
        _ => Err(ServiceError::MissingEnvelope { key }),
    }
}

/// Access to the product catalog.
///
/// Holds only a reference to its transport and is `Copy`, so it can be
/// handed out freely; see [`Client::products`](crate::Client::products).
pub struct ProductsService<'a, C: Transport> {
    client: &'a C,
}

impl<C: Transport> Clone for ProductsService<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Transport> Copy for ProductsService<'_, C> {}

impl<C: Transport> fmt::Debug for ProductsService<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductsService").finish_non_exhaustive()
    }
}

impl<'a, C: Transport> ProductsService<'a, C> {
    /// Creates a service that sends its requests through `client`.
    #[must_use]
    pub const fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Returns a lazy sequence over every product.
    ///
    /// Nothing is fetched until the returned resource is iterated.
    #[must_use]
    pub fn all(&self) -> PaginatedResource<Self> {
        self.all_with(ProductListParams::default())
    }

    /// Like [`all`](Self::all), restricted by the filters in `params`.
    #[must_use]
    pub fn all_with(&self, params: ProductListParams) -> PaginatedResource<Self> {
        PaginatedResource::new(*self, params)
    }

    /// Fetches one page of products matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Http`] if the request fails, or
    /// [`ServiceError::MissingEnvelope`] / [`ServiceError::Decode`] if the
    /// response does not describe a list of products.
    pub async fn list(&self, params: ProductListParams) -> Result<Vec<Product>, ServiceError> {
        let query = Some(params.to_query()?).filter(|q| !q.is_empty());
        let response = self.client.get(PRODUCTS_PATH, query).await?;

        let Value::Array(items) = unwrap_envelope(response.body, "items")? else {
            return Err(ServiceError::MissingEnvelope { key: "items" });
        };

        items
            .into_iter()
            .map(|item| -> Result<Product, ServiceError> {
                Ok(Product::from_payload(unwrap_envelope(item, "data")?)?)
            })
            .collect()
    }

    /// Fetches a single product by ID.
    ///
    /// # Errors
    ///
    /// A missing product surfaces as
    /// `ServiceError::Http(HttpError::NotFound(_))`.
    pub async fn find(&self, id: u64) -> Result<Product, ServiceError> {
        let path = format!("{PRODUCTS_PATH}/{id}");
        let response = self.client.get(&path, None).await?;
        Ok(Product::from_payload(unwrap_envelope(response.body, "data")?)?)
    }

    /// Creates a product.
    ///
    /// Accepts a [`Product`], a JSON object map, or a [`serde_json::Value`].
    /// Only creatable attributes are sent; `id` and unknown keys are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::TypeMismatch`] without making a request if a
    /// `Value` is not a JSON object. Request and decode failures are
    /// reported as in [`find`](Self::find).
    pub async fn create<I>(&self, input: I) -> Result<Product, ServiceError>
    where
        I: TryInto<ProductInput>,
        ServiceError: From<I::Error>,
    {
        let input: ProductInput = input.try_into()?;
        let payload = input.into_payload()?;
        let response = self
            .client
            .post(PRODUCTS_PATH, Value::Object(payload))
            .await?;
        Ok(Product::from_payload(unwrap_envelope(response.body, "data")?)?)
    }
}

impl<C: Transport> PageFetcher for ProductsService<'_, C> {
    type Item = Product;
    type Params = ProductListParams;

    async fn fetch_page(&self, params: ProductListParams) -> Result<Vec<Product>, ServiceError> {
        self.list(params).await
    }
}
