use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MediaKind, Movie, Show, TraktId};
use crate::store::Keyed;

/// A movie on the user's watchlist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistMovie {
    pub movie: Movie,
    pub listed_at: DateTime<Utc>,
    #[serde(default)]
    pub rank: Option<u32>,
}

impl WatchlistMovie {
    pub fn new(movie: Movie, listed_at: DateTime<Utc>) -> Self {
        Self {
            movie,
            listed_at,
            rank: None,
        }
    }
}

/// A show on the user's watchlist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistShow {
    pub show: Show,
    pub listed_at: DateTime<Utc>,
    #[serde(default)]
    pub rank: Option<u32>,
}

impl WatchlistShow {
    pub fn new(show: Show, listed_at: DateTime<Utc>) -> Self {
        Self {
            show,
            listed_at,
            rank: None,
        }
    }
}

/// Watchlist entry of either kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WatchlistItem {
    Movie(WatchlistMovie),
    Show(WatchlistShow),
}

impl WatchlistItem {
    pub fn id(&self) -> TraktId {
        match self {
            WatchlistItem::Movie(item) => item.movie.id,
            WatchlistItem::Show(item) => item.show.id,
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            WatchlistItem::Movie(_) => MediaKind::Movie,
            WatchlistItem::Show(_) => MediaKind::Show,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            WatchlistItem::Movie(item) => &item.movie.title,
            WatchlistItem::Show(item) => &item.show.title,
        }
    }

    pub fn listed_at(&self) -> DateTime<Utc> {
        match self {
            WatchlistItem::Movie(item) => item.listed_at,
            WatchlistItem::Show(item) => item.listed_at,
        }
    }

    /// Movie release date or show first air date, when known
    pub fn released(&self) -> Option<DateTime<Utc>> {
        match self {
            WatchlistItem::Movie(item) => item.movie.released_at(),
            WatchlistItem::Show(item) => item.show.first_aired,
        }
    }
}

impl From<WatchlistMovie> for WatchlistItem {
    fn from(item: WatchlistMovie) -> Self {
        WatchlistItem::Movie(item)
    }
}

impl From<WatchlistShow> for WatchlistItem {
    fn from(item: WatchlistShow) -> Self {
        WatchlistItem::Show(item)
    }
}

impl Keyed for WatchlistMovie {
    type Key = TraktId;

    fn key(&self) -> TraktId {
        self.movie.id
    }
}

impl Keyed for WatchlistShow {
    type Key = TraktId;

    fn key(&self) -> TraktId {
        self.show.id
    }
}
