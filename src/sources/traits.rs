use std::collections::BTreeMap;

use crate::errors::TedditResult;

/// Query parameters appended to a feed URL, e.g. `limit=2`.
pub type QueryParams = BTreeMap<String, String>;

#[cfg_attr(test, mockall::automock)]
pub trait FeedClient: Send + Sync {
    /// Fetch the raw body behind `url`.
    ///
    /// Fails with `TedditError::Network` on connection failure, timeout or a
    /// non-success status. Implementations never retry.
    fn fetch(&self, url: &str, params: &QueryParams) -> TedditResult<String>;
}
