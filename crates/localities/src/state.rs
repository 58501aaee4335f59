//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses trait objects for the repository and the store
//! and supports different backend combinations via feature flags.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use localities_core::repository::LocalityRepository;
use localities_core::storage::LocalityStore;

use crate::config::Config;

/// Shared application state.
///
/// This is cloned for each request handler and contains shared resources.
/// Nothing request-scoped lives here: every request derives its own
/// `RequestContext` from `request_timeout` and `shutdown`.
#[derive(Clone)]
pub struct AppState {
    /// Locality repository (cached, wraps the underlying store).
    pub localities: Arc<dyn LocalityRepository>,
    /// The underlying store, for readiness checks.
    pub store: Arc<dyn LocalityStore>,
    /// Root cancellation token, cancelled on shutdown.
    pub shutdown: CancellationToken,
    /// Deadline applied to every request's adapter calls.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates a new AppState with the given repository, store and configuration.
    fn build(
        localities: Arc<dyn LocalityRepository>,
        store: Arc<dyn LocalityStore>,
        config: &Config,
    ) -> Self {
        Self {
            localities,
            store,
            shutdown: CancellationToken::new(),
            request_timeout: config.request_timeout(),
        }
    }

    /// Cancels the root token, and with it every in-flight request context.
    pub fn signal_shutdown(&self) {
        self.shutdown.cancel();
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::cached::CachedLocalityRepository;
    use crate::storage::sqlite::SqliteLocalityStore;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store =
                Arc::new(SqliteLocalityStore::open(&config.store_uri, &config.store_database).await?);
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let repository = Arc::new(CachedLocalityRepository::new(
                store.clone(),
                cache,
                config.cache_failure_policy,
            ));

            Ok(Self::build(repository, store, config))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::cached::CachedLocalityRepository;
    use crate::storage::sqlite::SqliteLocalityStore;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store =
                Arc::new(SqliteLocalityStore::open(&config.store_uri, &config.store_database).await?);
            let cache = Arc::new(RedisCache::new(&config.cache_address).await?);

            let repository = Arc::new(CachedLocalityRepository::new(
                store.clone(),
                cache,
                config.cache_failure_policy,
            ));

            Ok(Self::build(repository, store, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::cached::CachedLocalityRepository;
    use crate::storage::inmemory::InMemoryLocalityStore;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for testing without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryLocalityStore::new());
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let repository = Arc::new(CachedLocalityRepository::new(
                store.clone(),
                cache,
                config.cache_failure_policy,
            ));

            Ok(Self::build(repository, store, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::cached::CachedLocalityRepository;
    use crate::storage::inmemory::InMemoryLocalityStore;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryLocalityStore::new());
            let cache = Arc::new(RedisCache::new(&config.cache_address).await?);

            let repository = Arc::new(CachedLocalityRepository::new(
                store.clone(),
                cache,
                config.cache_failure_policy,
            ));

            Ok(Self::build(repository, store, config))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================
