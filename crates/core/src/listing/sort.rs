//! Sort stage of the listing pipeline.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Destination;

/// Sortable keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Rating,
    Name,
    FavoritedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[serde(alias = "asc")]
    Ascending,
    #[default]
    #[serde(alias = "desc")]
    Descending,
}

/// A sort key plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SortSpec {
    #[serde(default)]
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

/// Return a new vector ordered per `spec`, leaving the input untouched so
/// repeated re-sorts start from the same base set.
///
/// `favorited_at` supplies the id → timestamp lookup for
/// [`SortKey::FavoritedAt`]; entries without a timestamp sort as if favorited
/// at epoch zero (oldest). Tie-breaks are fixed regardless of direction:
/// ascending id for rating and name, descending id for favorited-at (with
/// coarse timestamps, the most recently added of a tied pair surfaces first).
pub fn sort<F>(items: &[Destination], spec: &SortSpec, favorited_at: F) -> Vec<Destination>
where
    F: Fn(u32) -> Option<DateTime<Utc>>,
{
    let mut sorted: Vec<Destination> = items.to_vec();
    sorted.sort_by(|a, b| {
        let primary = match spec.key {
            SortKey::Rating => a.rating.total_cmp(&b.rating),
            SortKey::Name => name_key(&a.name).cmp(&name_key(&b.name)),
            SortKey::FavoritedAt => timestamp_or_epoch(favorited_at(a.id))
                .cmp(&timestamp_or_epoch(favorited_at(b.id))),
        };

        let primary = match spec.direction {
            SortDirection::Ascending => primary,
            SortDirection::Descending => primary.reverse(),
        };

        primary.then_with(|| tie_break(spec.key, a.id, b.id))
    });
    sorted
}

/// Case-insensitive lexicographic key. Full locale collation would need an
/// ICU dependency; lowercase comparison covers the dataset's names.
fn name_key(name: &str) -> String {
    name.to_lowercase()
}

fn timestamp_or_epoch(ts: Option<DateTime<Utc>>) -> DateTime<Utc> {
    ts.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn tie_break(key: SortKey, a: u32, b: u32) -> Ordering {
    match key {
        SortKey::Rating | SortKey::Name => a.cmp(&b),
        SortKey::FavoritedAt => b.cmp(&a),
    }
}
