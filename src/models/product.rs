//! Product resource model.
//!
//! # Example
//!
//! ```rust
//! use basecrm::{Price, Product};
//!
//! let product = Product {
//!     name: Some("Enterprise Plan".to_string()),
//!     sku: Some("ENT-1".to_string()),
//!     prices: Some(vec![Price::new("EUR", "1000.00")]),
//!     ..Default::default()
//! };
//! assert!(product.id.is_none());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A price of a product in one currency.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Price {
    /// The three-letter ISO 4217 currency code.
    pub currency: String,
    /// The amount as a decimal string to preserve precision.
    pub amount: String,
}

impl Price {
    /// Creates a price from a currency code and a decimal amount.
    #[must_use]
    pub fn new(currency: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount: amount.into(),
        }
    }
}

/// A product in the Base CRM product catalog.
///
/// # Fields
///
/// ## Writable Fields
/// - `active`, `description`, `name`, `sku`, `prices`
/// - `max_discount`, `max_markup` (percentages)
/// - `cost`, `cost_currency`
///
/// ## Read-Only Fields
/// - `id` - assigned by the server on creation
/// - `created_at`, `updated_at`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// The unique identifier of the product.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// Whether the product is active. Inactive products cannot be added to deals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Description of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Name of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Stock keeping unit identification code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Prices of the product, one entry per currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<Price>>,

    /// Maximum discount that can be applied, in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<f64>,

    /// Maximum markup that can be applied, in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_markup: Option<f64>,

    /// Cost of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,

    /// Currency of the product cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_currency: Option<String>,

    /// When the product was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the product was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Decodes a product from the `data` member of an API envelope.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the payload does not describe a product.
    pub fn from_payload(payload: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(payload)
    }

    /// Returns the set, writable attributes of this product as a JSON map.
    ///
    /// Read-only fields and unset fields are not included.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn to_attributes(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> Value {
        json!({
            "id": 1,
            "active": true,
            "description": "Product description",
            "name": "Product",
            "sku": "1000",
            "prices": [{"currency": "EUR", "amount": "1000.00"}],
            "max_discount": 10,
            "max_markup": 10,
            "cost": 1000,
            "cost_currency": "EUR",
            "created_at": "2014-08-27T16:32:56Z",
            "updated_at": "2014-08-27T17:32:56Z",
            "deleted_at": null
        })
    }

    #[test]
    fn test_product_deserializes_from_payload() {
        let product = Product::from_payload(sample_payload()).unwrap();

        assert_eq!(product.id, Some(1));
        assert_eq!(product.active, Some(true));
        assert_eq!(product.name.as_deref(), Some("Product"));
        assert_eq!(product.sku.as_deref(), Some("1000"));
        assert_eq!(product.prices, Some(vec![Price::new("EUR", "1000.00")]));
        assert_eq!(product.max_discount, Some(10.0));
        assert_eq!(product.max_markup, Some(10.0));
        assert_eq!(product.cost, Some(1000.0));
        assert_eq!(product.cost_currency.as_deref(), Some("EUR"));
        assert!(product.created_at.is_some());
        assert!(product.updated_at > product.created_at);
    }

    #[test]
    fn test_product_decodes_fractional_percentages() {
        let product =
            Product::from_payload(json!({"id": 3, "max_discount": 12.5, "max_markup": 7.5}))
                .unwrap();

        assert_eq!(product.max_discount, Some(12.5));
        assert_eq!(product.max_markup, Some(7.5));
        assert_eq!(product.to_attributes().unwrap()["max_discount"], json!(12.5));
    }

    #[test]
    fn test_product_tolerates_missing_fields() {
        let product = Product::from_payload(json!({"id": 7})).unwrap();

        assert_eq!(product.id, Some(7));
        assert!(product.name.is_none());
        assert!(product.prices.is_none());
    }

    #[test]
    fn test_product_rejects_non_object_payload() {
        assert!(Product::from_payload(json!("product")).is_err());
        assert!(Product::from_payload(json!({"id": "not-a-number"})).is_err());
    }

    #[test]
    fn test_to_attributes_omits_read_only_and_unset_fields() {
        let product = Product::from_payload(sample_payload()).unwrap();
        let attributes = product.to_attributes().unwrap();

        assert!(!attributes.contains_key("id"));
        assert!(!attributes.contains_key("created_at"));
        assert!(!attributes.contains_key("updated_at"));
        assert_eq!(attributes["name"], "Product");
        assert_eq!(attributes["prices"][0]["amount"], "1000.00");

        let sparse = Product {
            name: Some("Only name".to_string()),
            ..Default::default()
        };
        let attributes = sparse.to_attributes().unwrap();
        assert_eq!(attributes.len(), 1);
    }
}
