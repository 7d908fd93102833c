//! Resource services for the Base CRM API.
//!
//! Each service is a thin, `Copy` handle over a [`Transport`](crate::clients::Transport)
//! that translates raw API envelopes into typed models.
//!
//! - [`ProductsService`]: list, fetch and create products
//! - [`PaginatedResource`]: the lazy page sequence returned by `all()`
//! - [`ServiceError`]: the error type shared by all service operations

mod errors;
pub mod pagination;
mod products;

pub use errors::ServiceError;
pub use pagination::{
    Cursor, PageFetcher, PageParams, PaginatedResource, DEFAULT_PER_PAGE, MAX_PER_PAGE,
};
pub use products::{ProductListParams, ProductsService, SortBy, SortOrder};
