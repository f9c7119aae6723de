//! Types for the favorites facility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One persisted favorite: which destination, and when it was favorited.
/// The timestamp is fixed at creation and never updated on re-add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub destination_id: u32,
    pub favorited_at: DateTime<Utc>,
}

/// UI-facing signal from a favorites mutation. Every operation is
/// idempotent; the signal tells the caller whether anything changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteOutcome {
    Added,
    AlreadyFavorited,
    Removed,
    NotFavorited,
}

impl FavoriteOutcome {
    /// Whether the operation changed state.
    pub fn changed(&self) -> bool {
        matches!(self, FavoriteOutcome::Added | FavoriteOutcome::Removed)
    }

    /// Stable snake_case label, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteOutcome::Added => "added",
            FavoriteOutcome::AlreadyFavorited => "already_favorited",
            FavoriteOutcome::Removed => "removed",
            FavoriteOutcome::NotFavorited => "not_favorited",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FavoriteOutcome::Added => "Added to favorites",
            FavoriteOutcome::AlreadyFavorited => "Already in favorites",
            FavoriteOutcome::Removed => "Removed from favorites",
            FavoriteOutcome::NotFavorited => "Not in favorites",
        }
    }
}

/// Sort order for the reconciled favorites view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FavoritesSort {
    /// Favorited-at descending (most recent first). The default.
    #[default]
    Date,
    /// Rating descending.
    Rating,
    /// Name ascending.
    Name,
}

/// Errors for favorites operations.
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("Favorites storage error: {0}")]
    Storage(String),
}
