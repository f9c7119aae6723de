//! Favorites storage trait and the in-memory backend.

use std::sync::Mutex;

use super::{FavoriteRecord, FavoritesError};

/// Trait for favorites persistence backends.
///
/// The reconciliation logic only ever reads and writes whole snapshots
/// through this interface, which keeps the id-set/timestamp-map invariant
/// structural: a record carries both or neither.
pub trait FavoritesStore: Send + Sync {
    /// Load the persisted snapshot. A missing or empty store is an empty
    /// vector, not an error.
    fn load(&self) -> Result<Vec<FavoriteRecord>, FavoritesError>;

    /// Replace the persisted snapshot.
    fn save(&self, records: &[FavoriteRecord]) -> Result<(), FavoritesError>;
}

/// Non-durable store for tests and ephemeral deployments.
#[derive(Default)]
pub struct MemoryFavoritesStore {
    records: Mutex<Vec<FavoriteRecord>>,
}

impl MemoryFavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesStore for MemoryFavoritesStore {
    fn load(&self) -> Result<Vec<FavoriteRecord>, FavoritesError> {
        Ok(self
            .records
            .lock()
            .map_err(|e| FavoritesError::Storage(e.to_string()))?
            .clone())
    }

    fn save(&self, records: &[FavoriteRecord]) -> Result<(), FavoritesError> {
        *self
            .records
            .lock()
            .map_err(|e| FavoritesError::Storage(e.to_string()))? = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryFavoritesStore::new();
        assert!(store.load().unwrap().is_empty());

        let records = vec![
            FavoriteRecord {
                destination_id: 1,
                favorited_at: Utc::now(),
            },
            FavoriteRecord {
                destination_id: 2,
                favorited_at: Utc::now(),
            },
        ];
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);

        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
