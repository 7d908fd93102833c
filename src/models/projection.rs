//! Field whitelisting for outgoing product payloads.
//!
//! Callers may hand [`ProductsService::create`](crate::services::ProductsService::create)
//! either a typed [`Product`] or a loose JSON object. Both are reduced to
//! an attribute map and then projected onto [`CREATABLE_FIELDS`]; every
//! other key is dropped without error.
//!
//! # Example
//!
//! ```rust
//! use basecrm::models::ProductInput;
//! use serde_json::json;
//!
//! let input = ProductInput::try_from(json!({
//!     "id": 99,
//!     "name": "Widget",
//!     "favourite_colour": "blue"
//! }))
//! .unwrap();
//!
//! let payload = input.into_payload().unwrap();
//! assert_eq!(payload.len(), 1);
//! assert_eq!(payload["name"], "Widget");
//! ```

use std::fmt;

use serde_json::{Map, Value};

use crate::models::Product;
use crate::services::ServiceError;

/// A field of the product payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    /// `id`
    Id,
    /// `active`
    Active,
    /// `description`
    Description,
    /// `name`
    Name,
    /// `sku`
    Sku,
    /// `prices`
    Prices,
    /// `max_discount`
    MaxDiscount,
    /// `max_markup`
    MaxMarkup,
    /// `cost`
    Cost,
    /// `cost_currency`
    CostCurrency,
    /// `created_at`
    CreatedAt,
    /// `updated_at`
    UpdatedAt,
}

impl ProductField {
    /// Returns the wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Active => "active",
            Self::Description => "description",
            Self::Name => "name",
            Self::Sku => "sku",
            Self::Prices => "prices",
            Self::MaxDiscount => "max_discount",
            Self::MaxMarkup => "max_markup",
            Self::Cost => "cost",
            Self::CostCurrency => "cost_currency",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fields that may be sent when creating a product, in wire order.
pub const CREATABLE_FIELDS: &[ProductField] = &[
    ProductField::Active,
    ProductField::Description,
    ProductField::Name,
    ProductField::Sku,
    ProductField::Prices,
    ProductField::MaxDiscount,
    ProductField::MaxMarkup,
    ProductField::Cost,
    ProductField::CostCurrency,
];

/// Keeps only the keys of `attributes` that appear in `allowed`.
///
/// Values are carried over as-is, including explicit `null`s.
#[must_use]
pub fn project(attributes: &Map<String, Value>, allowed: &[ProductField]) -> Map<String, Value> {
    allowed
        .iter()
        .filter_map(|field| {
            attributes
                .get(field.as_str())
                .map(|value| (field.as_str().to_string(), value.clone()))
        })
        .collect()
}

/// Like [`project`], but every field in `required` must be present.
///
/// # Errors
///
/// Returns [`ServiceError::MissingAttributes`] naming the absent fields.
pub fn extract_required(
    attributes: &Map<String, Value>,
    required: &[ProductField],
) -> Result<Map<String, Value>, ServiceError> {
    let params = project(attributes, required);
    if params.len() == required.len() {
        return Ok(params);
    }

    Err(ServiceError::MissingAttributes {
        expected: required.iter().map(|f| f.as_str()).collect(),
        missing: required
            .iter()
            .filter(|f| !params.contains_key(f.as_str()))
            .map(|f| f.as_str())
            .collect(),
    })
}

/// Input accepted by product creation: a typed product or a loose attribute map.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductInput {
    /// A typed product.
    Product(Product),
    /// An untyped JSON object.
    Attributes(Map<String, Value>),
}

impl ProductInput {
    /// Flattens the input into an attribute map.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Decode`] if a typed product cannot be serialized.
    pub fn into_attributes(self) -> Result<Map<String, Value>, ServiceError> {
        match self {
            Self::Product(product) => Ok(product.to_attributes()?),
            Self::Attributes(map) => Ok(map),
        }
    }

    /// Flattens the input and projects it onto [`CREATABLE_FIELDS`].
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Decode`] if a typed product cannot be serialized.
    pub fn into_payload(self) -> Result<Map<String, Value>, ServiceError> {
        Ok(project(&self.into_attributes()?, CREATABLE_FIELDS))
    }
}

impl From<Product> for ProductInput {
    fn from(product: Product) -> Self {
        Self::Product(product)
    }
}

impl From<Map<String, Value>> for ProductInput {
    fn from(map: Map<String, Value>) -> Self {
        Self::Attributes(map)
    }
}

impl TryFrom<Value> for ProductInput {
    type Error = ServiceError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self::Attributes(map)),
            other => Err(ServiceError::TypeMismatch {
                found: json_type_name(&other),
            }),
        }
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
