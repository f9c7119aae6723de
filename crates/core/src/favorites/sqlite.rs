//! SQLite-backed favorites store.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use super::{FavoriteRecord, FavoritesError, FavoritesStore};

/// Durable favorites store, one row per favorited destination.
pub struct SqliteFavoritesStore {
    conn: Mutex<Connection>,
}

impl SqliteFavoritesStore {
    /// Open (or create) the database file and its schema.
    pub fn new(path: &Path) -> Result<Self, FavoritesError> {
        let conn = Connection::open(path).map_err(|e| FavoritesError::Storage(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self, FavoritesError> {
        let conn =
            Connection::open_in_memory().map_err(|e| FavoritesError::Storage(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), FavoritesError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS favorites (
                destination_id INTEGER PRIMARY KEY,
                favorited_at TEXT NOT NULL
            );
            "#,
        )
        .map_err(|e| FavoritesError::Storage(e.to_string()))?;
        Ok(())
    }
}

impl FavoritesStore for SqliteFavoritesStore {
    fn load(&self) -> Result<Vec<FavoriteRecord>, FavoritesError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| FavoritesError::Storage(e.to_string()))?;

        let mut stmt = conn
            .prepare("SELECT destination_id, favorited_at FROM favorites ORDER BY destination_id")
            .map_err(|e| FavoritesError::Storage(e.to_string()))?;

        let rows = stmt
            .query_map(params![], |row| {
                let favorited_at_str: String = row.get(1)?;
                let favorited_at = DateTime::parse_from_rfc3339(&favorited_at_str)
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

                Ok(FavoriteRecord {
                    destination_id: row.get(0)?,
                    favorited_at,
                })
            })
            .map_err(|e| FavoritesError::Storage(e.to_string()))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| FavoritesError::Storage(e.to_string()))?);
        }
        Ok(records)
    }

    fn save(&self, records: &[FavoriteRecord]) -> Result<(), FavoritesError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| FavoritesError::Storage(e.to_string()))?;

        // Snapshot replace in one transaction so a crash mid-save cannot
        // leave ids without timestamps or vice versa.
        let tx = conn
            .transaction()
            .map_err(|e| FavoritesError::Storage(e.to_string()))?;

        tx.execute("DELETE FROM favorites", params![])
            .map_err(|e| FavoritesError::Storage(e.to_string()))?;

        for record in records {
            tx.execute(
                "INSERT INTO favorites (destination_id, favorited_at) VALUES (?, ?)",
                params![record.destination_id, record.favorited_at.to_rfc3339()],
            )
            .map_err(|e| FavoritesError::Storage(e.to_string()))?;
        }

        tx.commit()
            .map_err(|e| FavoritesError::Storage(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: u32, day: u32) -> FavoriteRecord {
        FavoriteRecord {
            destination_id: id,
            favorited_at: Utc.with_ymd_and_hms(2024, 5, day, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_store_loads_empty() {
        let store = SqliteFavoritesStore::in_memory().unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = SqliteFavoritesStore::in_memory().unwrap();
        let records = vec![record(3, 1), record(7, 2)];
        store.save(&records).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_save_replaces_snapshot() {
        let store = SqliteFavoritesStore::in_memory().unwrap();
        store.save(&[record(1, 1), record(2, 2)]).unwrap();
        store.save(&[record(2, 2)]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].destination_id, 2);
    }

    #[test]
    fn test_durable_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("favorites.db");

        {
            let store = SqliteFavoritesStore::new(&db_path).unwrap();
            store.save(&[record(5, 3)]).unwrap();
        }

        let reopened = SqliteFavoritesStore::new(&db_path).unwrap();
        let loaded = reopened.load().unwrap();
        assert_eq!(loaded, vec![record(5, 3)]);
    }
}
