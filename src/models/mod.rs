//! Typed resource models and payload projection.
//!
//! - [`Product`] and [`Price`]: the product resource as returned by the API
//! - [`ProductInput`]: what product creation accepts
//! - [`project`], [`extract_required`], [`CREATABLE_FIELDS`]: payload whitelisting

mod product;
mod projection;

pub use product::{Price, Product};
pub use projection::{extract_required, project, ProductField, ProductInput, CREATABLE_FIELDS};
