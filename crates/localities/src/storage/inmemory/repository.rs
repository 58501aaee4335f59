//! In-memory locality store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use localities_core::locality::Locality;
use localities_core::storage::{LocalityStore, Result, StoreError};

/// In-memory storage backend for testing.
///
/// Records are kept in insertion order, which is the order `find_all`
/// returns. Data is not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocalityStore {
    localities: Arc<RwLock<Vec<Locality>>>,
}

impl InMemoryLocalityStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `localities`, in order.
    #[cfg(test)]
    pub fn with_localities(localities: Vec<Locality>) -> Self {
        Self {
            localities: Arc::new(RwLock::new(localities)),
        }
    }
}

#[async_trait]
impl LocalityStore for InMemoryLocalityStore {
    async fn find_all(&self) -> Result<Vec<Locality>> {
        Ok(self.localities.read().await.clone())
    }

    async fn find_by_code(&self, code: i64) -> Result<Option<Locality>> {
        let localities = self.localities.read().await;
        Ok(localities.iter().find(|l| l.code == code).cloned())
    }

    async fn insert(&self, locality: &Locality) -> Result<()> {
        let mut localities = self.localities.write().await;
        if localities.iter().any(|l| l.code == locality.code) {
            return Err(StoreError::Duplicate {
                code: locality.code,
            });
        }
        localities.push(locality.clone());
        Ok(())
    }

    async fn update_by_code(&self, code: i64, replacement: &Locality) -> Result<u64> {
        let mut localities = self.localities.write().await;

        let Some(index) = localities.iter().position(|l| l.code == code) else {
            return Ok(0);
        };

        if replacement.code != code && localities.iter().any(|l| l.code == replacement.code) {
            return Err(StoreError::Duplicate {
                code: replacement.code,
            });
        }

        localities[index] = replacement.clone();
        Ok(1)
    }

    async fn delete_by_code(&self, code: i64) -> Result<u64> {
        let mut localities = self.localities.write().await;
        let before = localities.len();
        localities.retain(|l| l.code != code);
        Ok((before - localities.len()) as u64)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha() -> Locality {
        Locality::new(1, "Alpha")
            .with_statistical_code(10)
            .with_status(1)
    }

    #[tokio::test]
    async fn test_insert_and_find_by_code() {
        let store = InMemoryLocalityStore::new();

        store.insert(&alpha()).await.unwrap();

        assert_eq!(store.find_by_code(1).await.unwrap(), Some(alpha()));
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = InMemoryLocalityStore::new();
        store.insert(&Locality::new(3, "Gamma")).await.unwrap();
        store.insert(&alpha()).await.unwrap();

        let codes: Vec<i64> = store
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|l| l.code)
            .collect();

        assert_eq!(codes, vec![3, 1]);
    }

    #[tokio::test]
    async fn test_duplicate_insert_fails() {
        let store = InMemoryLocalityStore::with_localities(vec![alpha()]);

        let result = store.insert(&alpha()).await;

        assert_eq!(result, Err(StoreError::Duplicate { code: 1 }));
    }

    #[tokio::test]
    async fn test_update_by_code() {
        let store = InMemoryLocalityStore::with_localities(vec![alpha()]);
        let replacement = Locality::new(1, "Beta");

        assert_eq!(store.update_by_code(1, &replacement).await.unwrap(), 1);
        assert_eq!(store.find_by_code(1).await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn test_update_can_rename_key() {
        let store = InMemoryLocalityStore::with_localities(vec![alpha()]);

        store
            .update_by_code(1, &Locality::new(2, "Alpha"))
            .await
            .unwrap();

        assert_eq!(store.find_by_code(1).await.unwrap(), None);
        assert!(store.find_by_code(2).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_rename_onto_existing_code_fails() {
        let store =
            InMemoryLocalityStore::with_localities(vec![alpha(), Locality::new(2, "Beta")]);

        let result = store.update_by_code(1, &Locality::new(2, "Alpha")).await;

        assert_eq!(result, Err(StoreError::Duplicate { code: 2 }));
    }

    #[tokio::test]
    async fn test_update_missing_matches_zero() {
        let store = InMemoryLocalityStore::new();

        assert_eq!(
            store
                .update_by_code(99, &Locality::new(99, "Nowhere"))
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_delete_by_code() {
        let store = InMemoryLocalityStore::with_localities(vec![alpha()]);

        assert_eq!(store.delete_by_code(1).await.unwrap(), 1);
        assert_eq!(store.delete_by_code(1).await.unwrap(), 0);
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
