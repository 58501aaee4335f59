/// The single cache key holding the snapshot of the whole locality collection.
pub const LOCALITIES_SNAPSHOT_KEY: &str = "localities";

/// Returns the cache key for the locality collection snapshot.
pub fn localities_snapshot_key() -> &'static str {
    LOCALITIES_SNAPSHOT_KEY
}
