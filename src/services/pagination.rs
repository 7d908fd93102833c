//! Lazy, page-numbered iteration over list endpoints.
//!
//! A [`PaginatedResource`] describes a sequence without fetching anything.
//! Requests are only issued as a [`Cursor`] obtained from
//! [`PaginatedResource::cursor`] is advanced, one page at a time. Every new
//! cursor starts over from the first page.
//!
//! # Example
//!
//! ```rust,ignore
//! let products = client.products().all().per_page(50);
//!
//! let mut cursor = products.cursor();
//! while let Some(product) = cursor.next().await {
//!     println!("{:?}", product?.name);
//! }
//! ```

use std::collections::VecDeque;

use crate::services::ServiceError;

/// Page size used when the params do not set one.
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Largest page size the API honours.
pub const MAX_PER_PAGE: u32 = 100;

/// Query parameters that carry page-number pagination.
pub trait PageParams {
    /// The requested page, starting at 1.
    fn page(&self) -> Option<u32>;
    /// The requested page size.
    fn per_page(&self) -> Option<u32>;
    /// Sets the requested page.
    fn set_page(&mut self, page: u32);
    /// Sets the requested page size.
    fn set_per_page(&mut self, per_page: u32);
}

/// Fetches a single page of a list endpoint.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// The element type of a page.
    type Item;
    /// The params type passed to each request.
    type Params: PageParams + Clone;

    /// Fetches the page described by `params`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying request produced.
    async fn fetch_page(&self, params: Self::Params) -> Result<Vec<Self::Item>, ServiceError>;
}

/// A restartable, lazily fetched sequence of items.
#[derive(Debug, Clone)]
pub struct PaginatedResource<F: PageFetcher> {
    fetcher: F,
    params: F::Params,
}

impl<F: PageFetcher> PaginatedResource<F> {
    /// Creates a sequence over `fetcher` starting from `params`.
    ///
    /// No request is made.
    #[must_use]
    pub const fn new(fetcher: F, params: F::Params) -> Self {
        Self { fetcher, params }
    }

    /// Sets the page size, clamped to `1..=MAX_PER_PAGE`.
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.params.set_per_page(per_page.clamp(1, MAX_PER_PAGE));
        self
    }

    /// Returns the params each cursor starts from.
    #[must_use]
    pub const fn params(&self) -> &F::Params {
        &self.params
    }

    /// Starts a new pass over the sequence from its first page.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_, F> {
        let page = self.params.page().unwrap_or(1).max(1);
        let per_page = self
            .params
            .per_page()
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);

        Cursor {
            fetcher: &self.fetcher,
            params: self.params.clone(),
            page,
            per_page,
            buffer: VecDeque::new(),
            done: false,
        }
    }

    /// Fetches every page and returns all items in order.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error encountered.
    pub async fn try_collect(&self) -> Result<Vec<F::Item>, ServiceError> {
        let mut cursor = self.cursor();
        let mut items = Vec::new();
        while let Some(page) = cursor.next_page().await {
            items.extend(page?);
        }
        Ok(items)
    }
}

/// A single pass over a [`PaginatedResource`].
pub struct Cursor<'r, F: PageFetcher> {
    fetcher: &'r F,
    params: F::Params,
    page: u32,
    per_page: u32,
    buffer: VecDeque<F::Item>,
    done: bool,
}

impl<F: PageFetcher> Cursor<'_, F> {
    /// Returns the next item, fetching a new page when the current one is used up.
    ///
    /// Returns `None` once the sequence is exhausted. A fetch error is
    /// returned once and ends the sequence.
    #[allow(clippy::should_implement_trait)]
    pub async fn next(&mut self) -> Option<Result<F::Item, ServiceError>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(item));
            }
            match self.next_page().await? {
                Ok(items) => self.buffer.extend(items),
                Err(e) => return Some(Err(e)),
            }
        }
    }

    /// Fetches the next whole page.
    ///
    /// Items already buffered by [`next`](Self::next) are not included.
    pub async fn next_page(&mut self) -> Option<Result<Vec<F::Item>, ServiceError>> {
        if self.done {
            return None;
        }

        let mut params = self.params.clone();
        params.set_page(self.page);
        params.set_per_page(self.per_page);

        tracing::trace!(page = self.page, per_page = self.per_page, "Fetching page");

        let items = match self.fetcher.fetch_page(params).await {
            Ok(items) => items,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        if items.len() < self.per_page as usize {
            self.done = true;
            tracing::debug!(last_page = self.page, "Pagination exhausted");
        }
        if items.is_empty() {
            return None;
        }

        self.page += 1;
        Some(Ok(items))
    }

    /// Returns `true` once no further page will be requested.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.done && self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpError, HttpResponseError};
    use std::sync::Mutex;

    #[derive(Debug, Clone, Default)]
    struct TestParams {
        page: Option<u32>,
        per_page: Option<u32>,
    }

    impl PageParams for TestParams {
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

    /// Serves `total` numbered items, failing on `fail_on` when set.
    struct NumberFetcher {
        total: u32,
        fail_on: Option<u32>,
        requests: Mutex<Vec<(u32, u32)>>,
    }

    impl NumberFetcher {
        fn new(total: u32) -> Self {
            Self {
                total,
                fail_on: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<(u32, u32)> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl PageFetcher for &NumberFetcher {
        type Item = u32;
        type Params = TestParams;

        async fn fetch_page(&self, params: TestParams) -> Result<Vec<u32>, ServiceError> {
            let page = params.page.unwrap();
            let per_page = params.per_page.unwrap();
            self.requests.lock().unwrap().push((page, per_page));

            if self.fail_on == Some(page) {
                return Err(HttpError::from_status(HttpResponseError::from_body(
                    500,
                    "boom",
                    None,
                ))
                .into());
            }

            let start = (page - 1) * per_page;
            Ok((start..self.total.min(start + per_page)).collect())
        }
    }

    #[test]
    fn test_creating_resource_makes_no_requests() {
        let fetcher = NumberFetcher::new(10);
        let _resource = PaginatedResource::new(&fetcher, TestParams::default());
        assert!(fetcher.requests().is_empty());
    }

    #[test]
    fn test_cursor_walks_pages_until_short_page() {
        let fetcher = NumberFetcher::new(7);
        let resource = PaginatedResource::new(&fetcher, TestParams::default()).per_page(3);

        let items = tokio_test::block_on(resource.try_collect()).unwrap();

        assert_eq!(items, (0..7).collect::<Vec<_>>());
        assert_eq!(fetcher.requests(), vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_cursor_stops_after_empty_page() {
        let fetcher = NumberFetcher::new(6);
        let resource = PaginatedResource::new(&fetcher, TestParams::default()).per_page(3);

        let items = tokio_test::block_on(resource.try_collect()).unwrap();

        assert_eq!(items.len(), 6);
        assert_eq!(fetcher.requests(), vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_cursor_yields_items_one_by_one() {
        let fetcher = NumberFetcher::new(5);
        let resource = PaginatedResource::new(&fetcher, TestParams::default()).per_page(2);

        tokio_test::block_on(async {
            let mut cursor = resource.cursor();
            assert_eq!(cursor.next().await.unwrap().unwrap(), 0);
            assert_eq!(fetcher.requests().len(), 1);

            let mut rest = Vec::new();
            while let Some(item) = cursor.next().await {
                rest.push(item.unwrap());
            }
            assert_eq!(rest, vec![1, 2, 3, 4]);
            assert!(cursor.is_exhausted());
            assert!(cursor.next().await.is_none());
        });
    }

    #[test]
    fn test_each_cursor_restarts_from_first_page() {
        let fetcher = NumberFetcher::new(2);
        let resource = PaginatedResource::new(&fetcher, TestParams::default());

        let first = tokio_test::block_on(resource.try_collect()).unwrap();
        let second = tokio_test::block_on(resource.try_collect()).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            fetcher.requests(),
            vec![(1, DEFAULT_PER_PAGE), (1, DEFAULT_PER_PAGE)]
        );
    }

    #[test]
    fn test_cursor_honours_starting_page() {
        let fetcher = NumberFetcher::new(10);
        let params = TestParams {
            page: Some(3),
            per_page: Some(3),
        };
        let resource = PaginatedResource::new(&fetcher, params);

        let items = tokio_test::block_on(resource.try_collect()).unwrap();

        assert_eq!(items, vec![6, 7, 8, 9]);
    }

    #[test]
    fn test_per_page_is_clamped() {
        let fetcher = NumberFetcher::new(0);
        let resource = PaginatedResource::new(&fetcher, TestParams::default()).per_page(500);
        assert_eq!(resource.params().per_page, Some(MAX_PER_PAGE));

        let resource = resource.per_page(0);
        assert_eq!(resource.params().per_page, Some(1));
    }

    #[test]
    fn test_fetch_error_is_yielded_once_then_ends() {
        let fetcher = NumberFetcher {
            fail_on: Some(2),
            ..NumberFetcher::new(10)
        };
        let resource = PaginatedResource::new(&fetcher, TestParams::default()).per_page(2);

        tokio_test::block_on(async {
            let mut cursor = resource.cursor();
            assert_eq!(cursor.next_page().await.unwrap().unwrap(), vec![0, 1]);
            assert!(matches!(
                cursor.next_page().await,
                Some(Err(ServiceError::Http(HttpError::Server(_))))
            ));
            assert!(cursor.next_page().await.is_none());
        });
        assert_eq!(fetcher.requests().len(), 2);
    }

    #[test]
    fn test_try_collect_returns_first_error() {
        let fetcher = NumberFetcher {
            fail_on: Some(1),
            ..NumberFetcher::new(10)
        };
        let resource = PaginatedResource::new(&fetcher, TestParams::default());

        let result = tokio_test::block_on(resource.try_collect());

        assert!(result.is_err());
    }
}
