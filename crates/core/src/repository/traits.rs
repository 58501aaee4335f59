use async_trait::async_trait;

use crate::context::RequestContext;
use crate::locality::Locality;

use super::Result;

/// Locality operations as seen by the HTTP layer.
///
/// Every call takes the request's own [`RequestContext`]; implementations must
/// run each store and cache call inside it.
#[async_trait]
pub trait LocalityRepository: Send + Sync {
    /// Returns the whole collection in the store's natural order.
    async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<Locality>>;

    /// Persists a new locality and returns it.
    async fn create(&self, ctx: &RequestContext, candidate: Locality) -> Result<Locality>;

    /// Replaces all fields of the locality matching `code`.
    async fn update(&self, ctx: &RequestContext, code: i64, replacement: Locality) -> Result<()>;

    /// Removes the locality matching `code`.
    async fn delete(&self, ctx: &RequestContext, code: i64) -> Result<()>;

    /// Gets a single locality by code.
    async fn get_one(&self, ctx: &RequestContext, code: i64) -> Result<Locality>;
}
