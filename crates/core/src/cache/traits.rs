use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Key-value cache over opaque byte payloads.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key. A miss is `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache. `None` means the value never expires.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key. Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<()>;
}
