//! Favorites - client-persisted favorite state and its reconciliation with
//! the live catalog.
//!
//! State is a set of favorited ids plus an id -> favorited-at map. Both are
//! held in one record map so the "a timestamp exists iff its id is favorited"
//! invariant holds by construction; every mutation persists the full snapshot
//! through a [`FavoritesStore`] before the in-memory state changes.

mod sqlite;
mod store;
mod types;

pub use sqlite::SqliteFavoritesStore;
pub use store::{FavoritesStore, MemoryFavoritesStore};
pub use types::*;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::catalog::Destination;
use crate::listing::{sort, SortDirection, SortKey, SortSpec};

/// The favorites service: add/remove/clear with idempotent outcomes, plus
/// reconciliation of persisted ids against a catalog snapshot.
pub struct Favorites {
    store: Arc<dyn FavoritesStore>,
    records: Mutex<BTreeMap<u32, DateTime<Utc>>>,
}

impl Favorites {
    /// Load persisted state from the store.
    pub fn open(store: Arc<dyn FavoritesStore>) -> Result<Self, FavoritesError> {
        let records = store
            .load()?
            .into_iter()
            .map(|r| (r.destination_id, r.favorited_at))
            .collect();
        Ok(Self {
            store,
            records: Mutex::new(records),
        })
    }

    fn records(&self) -> MutexGuard<'_, BTreeMap<u32, DateTime<Utc>>> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(
        &self,
        records: &BTreeMap<u32, DateTime<Utc>>,
    ) -> Result<(), FavoritesError> {
        let snapshot: Vec<FavoriteRecord> = records
            .iter()
            .map(|(&destination_id, &favorited_at)| FavoriteRecord {
                destination_id,
                favorited_at,
            })
            .collect();
        self.store.save(&snapshot)
    }

    /// Favorite a destination. Re-adding is a no-op that keeps the original
    /// timestamp.
    pub fn add(&self, id: u32) -> Result<FavoriteOutcome, FavoritesError> {
        let mut records = self.records();
        if records.contains_key(&id) {
            return Ok(FavoriteOutcome::AlreadyFavorited);
        }

        let mut updated = records.clone();
        updated.insert(id, Utc::now());
        self.persist(&updated)?;
        *records = updated;
        Ok(FavoriteOutcome::Added)
    }

    /// Unfavorite a destination, dropping its timestamp with it.
    pub fn remove(&self, id: u32) -> Result<FavoriteOutcome, FavoritesError> {
        let mut records = self.records();
        if !records.contains_key(&id) {
            return Ok(FavoriteOutcome::NotFavorited);
        }

        let mut updated = records.clone();
        updated.remove(&id);
        self.persist(&updated)?;
        *records = updated;
        Ok(FavoriteOutcome::Removed)
    }

    /// Drop every favorite unconditionally.
    pub fn clear(&self) -> Result<(), FavoritesError> {
        let mut records = self.records();
        self.store.save(&[])?;
        records.clear();
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.records().len()
    }

    pub fn is_favorited(&self, id: u32) -> bool {
        self.records().contains_key(&id)
    }

    /// When the destination was favorited, if it is.
    pub fn favorited_at(&self, id: u32) -> Option<DateTime<Utc>> {
        self.records().get(&id).copied()
    }

    /// The favorited id set, ascending.
    pub fn ids(&self) -> Vec<u32> {
        self.records().keys().copied().collect()
    }

    /// Intersect the catalog with the favorited ids and order the result.
    ///
    /// Favorited ids with no catalog entry (the catalog may have shrunk
    /// since they were added) are silently excluded; they stay in the set in
    /// case the catalog grows them back.
    pub fn reconcile(
        &self,
        catalog: &[Destination],
        sort_by: FavoritesSort,
    ) -> Vec<Destination> {
        let records = self.records().clone();

        let favorited: Vec<Destination> = catalog
            .iter()
            .filter(|d| records.contains_key(&d.id))
            .cloned()
            .collect();

        let spec = match sort_by {
            FavoritesSort::Date => SortSpec::new(SortKey::FavoritedAt, SortDirection::Descending),
            FavoritesSort::Rating => SortSpec::new(SortKey::Rating, SortDirection::Descending),
            FavoritesSort::Name => SortSpec::new(SortKey::Name, SortDirection::Ascending),
        };

        sort(&favorited, &spec, |id| records.get(&id).copied())
    }
}
