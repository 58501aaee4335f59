use async_trait::async_trait;

use crate::locality::Locality;

use super::Result;

/// Persistent locality collection keyed by the unique integer `code`.
///
/// Implementations report "no document matched" through `Option`/match counts
/// and reserve `StoreError` for real failures.
#[async_trait]
pub trait LocalityStore: Send + Sync {
    /// Returns every locality, in the store's natural order.
    async fn find_all(&self) -> Result<Vec<Locality>>;

    /// Gets a locality by its code.
    async fn find_by_code(&self, code: i64) -> Result<Option<Locality>>;

    /// Inserts a new locality. The code is trusted to be unique.
    async fn insert(&self, locality: &Locality) -> Result<()>;

    /// Overwrites all five fields of the record matching `code`, including
    /// `code` itself. Returns the number of matched records.
    async fn update_by_code(&self, code: i64, replacement: &Locality) -> Result<u64>;

    /// Deletes the record matching `code`. Returns the number of matched records.
    async fn delete_by_code(&self, code: i64) -> Result<u64>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<()>;
}
