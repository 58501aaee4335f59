//! Cached locality repository decorator.
//!
//! The whole collection is cached as one JSON snapshot under a fixed key with
//! no expiry. Any successful write drops the snapshot; the next read rebuilds
//! it from the store.
//!
//! # Consistency
//!
//! No lock is held across the cache/store boundary, so two standard
//! cache-aside races remain:
//!
//! - A read that misses, reads the store before a concurrent write lands, and
//!   sets the snapshot after that write's invalidation leaves a stale snapshot
//!   until the next successful write.
//! - Two concurrent misses both read the store and both set the snapshot.
//!   Last write wins.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use localities_core::cache::{
    deserialize_localities, localities_snapshot_key, serialize_localities, Cache, CacheError,
};
use localities_core::context::RequestContext;
use localities_core::locality::Locality;
use localities_core::repository::{
    CacheFailurePolicy, LocalityError, LocalityRepository, Result,
};
use localities_core::storage::{LocalityStore, StoreError};

/// Runs a store call inside the request's cancellation and deadline scope.
async fn in_store_scope<T, F>(ctx: &RequestContext, fut: F) -> std::result::Result<T, StoreError>
where
    F: Future<Output = std::result::Result<T, StoreError>>,
{
    ctx.scope(fut).await?
}

/// Runs a cache call inside the request's cancellation and deadline scope.
async fn in_cache_scope<T, F>(ctx: &RequestContext, fut: F) -> std::result::Result<T, CacheError>
where
    F: Future<Output = std::result::Result<T, CacheError>>,
{
    ctx.scope(fut).await?
}

/// Cache-aside locality repository.
///
/// # Type Parameters
///
/// * `S` - The underlying store implementation
/// * `C` - The cache implementation
pub struct CachedLocalityRepository<S, C>
where
    S: LocalityStore,
    C: Cache,
{
    store: Arc<S>,
    cache: Arc<C>,
    policy: CacheFailurePolicy,
}

impl<S, C> CachedLocalityRepository<S, C>
where
    S: LocalityStore,
    C: Cache,
{
    /// Creates a new cached locality repository.
    ///
    /// # Arguments
    ///
    /// * `store` - The store holding the collection
    /// * `cache` - The cache holding the snapshot
    /// * `policy` - What `list_all` does when the cache errors
    pub fn new(store: Arc<S>, cache: Arc<C>, policy: CacheFailurePolicy) -> Self {
        Self {
            store,
            cache,
            policy,
        }
    }

    async fn fetch_all(&self, ctx: &RequestContext) -> Result<Vec<Locality>> {
        tracing::debug!(request_id = %ctx.request_id, "Request to store");
        Ok(in_store_scope(ctx, self.store.find_all()).await?)
    }

    /// Drops the snapshot after a successful write.
    ///
    /// Failure is logged and swallowed: the write already happened and the
    /// caller is told so.
    async fn invalidate(&self, ctx: &RequestContext) {
        let key = localities_snapshot_key();
        if let Err(err) = in_cache_scope(ctx, self.cache.delete(key)).await {
            tracing::warn!(
                request_id = %ctx.request_id,
                error = %err,
                "Failed to invalidate localities snapshot"
            );
        }
    }
}

#[async_trait]
impl<S, C> LocalityRepository for CachedLocalityRepository<S, C>
where
    S: LocalityStore + 'static,
    C: Cache + 'static,
{
    async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<Locality>> {
        let key = localities_snapshot_key();

        tracing::debug!(request_id = %ctx.request_id, "Request to cache");
        match in_cache_scope(ctx, self.cache.get(key)).await {
            Ok(Some(bytes)) => match deserialize_localities(&bytes) {
                Ok(localities) => {
                    tracing::trace!(count = localities.len(), "Cache hit for localities");
                    return Ok(localities);
                }
                // Corrupt snapshot - treat as a miss and overwrite it below
                Err(err) => {
                    tracing::warn!(error = %err, "Cached localities deserialization failed");
                }
            },
            Ok(None) => tracing::trace!("Cache miss for localities"),
            Err(err) => match self.policy {
                CacheFailurePolicy::FailClosed => {
                    tracing::warn!(error = %err, "Cache unavailable, failing read");
                    return Err(err.into());
                }
                CacheFailurePolicy::FailOpen => {
                    tracing::warn!(error = %err, "Cache unavailable, serving from store");
                    return self.fetch_all(ctx).await;
                }
            },
        }

        let localities = self.fetch_all(ctx).await?;

        let bytes = serialize_localities(&localities)
            .map_err(|e| LocalityError::Internal(e.to_string()))?;
        if let Err(err) = in_cache_scope(ctx, self.cache.set(key, &bytes, None)).await {
            tracing::warn!(error = %err, "Failed to cache localities");
        }

        Ok(localities)
    }

    async fn create(&self, ctx: &RequestContext, candidate: Locality) -> Result<Locality> {
        tracing::debug!(request_id = %ctx.request_id, code = candidate.code, "Request to store");
        in_store_scope(ctx, self.store.insert(&candidate)).await?;

        self.invalidate(ctx).await;

        tracing::debug!(code = candidate.code, name = %candidate.name, "Locality created");
        Ok(candidate)
    }

    async fn update(&self, ctx: &RequestContext, code: i64, replacement: Locality) -> Result<()> {
        tracing::debug!(request_id = %ctx.request_id, code, "Request to store");
        let matched = in_store_scope(ctx, self.store.update_by_code(code, &replacement)).await?;
        if matched == 0 {
            return Err(LocalityError::NotFound { code });
        }

        self.invalidate(ctx).await;

        tracing::debug!(code, new_code = replacement.code, "Locality updated");
        Ok(())
    }

    async fn delete(&self, ctx: &RequestContext, code: i64) -> Result<()> {
        tracing::debug!(request_id = %ctx.request_id, code, "Request to store");
        let matched = in_store_scope(ctx, self.store.delete_by_code(code)).await?;
        if matched == 0 {
            return Err(LocalityError::NotFound { code });
        }

        self.invalidate(ctx).await;

        tracing::debug!(code, "Locality deleted");
        Ok(())
    }

    async fn get_one(&self, ctx: &RequestContext, code: i64) -> Result<Locality> {
        tracing::debug!(request_id = %ctx.request_id, code, "Request to store");
        in_store_scope(ctx, self.store.find_by_code(code))
            .await?
            .ok_or(LocalityError::NotFound { code })
    }
}
