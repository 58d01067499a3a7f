use std::future::Future;

use moka::future::Cache;
use tracing::debug;

/// One cache region covering a resource type's entire "list all" result.
///
/// Unbounded and TTL-less: an entry lives until a write to the same resource
/// type calls `evict`. Clones share the underlying region, so one instance
/// can be created at startup and handed to per-request services.
#[derive(Clone)]
pub struct ListCache<T: Clone + Send + Sync + 'static> {
    region: &'static str,
    inner: Cache<(), Vec<T>>,
}

impl<T: Clone + Send + Sync + 'static> ListCache<T> {
    pub fn new(region: &'static str) -> Self {
        Self { region, inner: Cache::builder().build() }
    }

    /// Return the cached list, or compute, store, and return it.
    /// Errors from the compute step are returned as-is and never cached.
    pub async fn get_or_compute<F, Fut, E>(&self, compute: F) -> Result<Vec<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        if let Some(hit) = self.inner.get(&()).await {
            debug!(region = self.region, "cache hit");
            return Ok(hit);
        }
        debug!(region = self.region, "cache miss");
        let fresh = compute().await?;
        self.inner.insert((), fresh.clone()).await;
        Ok(fresh)
    }

    /// Drop the whole region. The next `get_or_compute` recomputes.
    pub async fn evict(&self) {
        debug!(region = self.region, "cache evicted");
        self.inner.invalidate(&()).await;
    }
}
