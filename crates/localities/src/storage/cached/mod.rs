//! Cached repository decorator.
//!
//! Wraps a locality store with the cache-aside pattern over a single
//! snapshot of the whole collection:
//!
//! - **Reads**: Check cache first, on miss fetch from the store and populate cache
//! - **Writes**: Persist to the store, then invalidate the snapshot
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let store = Arc::new(SqliteLocalityStore::new("localities.sqlite3").await?);
//! let cache = Arc::new(MemoryCache::new(1024));
//!
//! let repository = CachedLocalityRepository::new(store, cache, CacheFailurePolicy::FailOpen);
//! ```

mod locality;

pub use locality::CachedLocalityRepository;
