mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{localities_snapshot_key, LOCALITIES_SNAPSHOT_KEY};
pub use serialization::{deserialize_localities, serialize_localities, SerializationError};
pub use traits::Cache;
