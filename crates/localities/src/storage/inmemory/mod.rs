//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of the locality store
//! that keeps all records in a `Vec` wrapped in `Arc<RwLock<_>>`. This is
//! useful for testing and development scenarios where persistence is not
//! required.
//!
//! # Example
//!
//! ```rust,ignore
//! use localities::storage::inmemory::InMemoryLocalityStore;
//!
//! let store = InMemoryLocalityStore::new();
//! // Use store for testing...
//! ```

mod repository;

pub use repository::InMemoryLocalityStore;
