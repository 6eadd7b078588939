use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod lists;
pub mod progress;
pub mod watchlist;

pub use lists::{ListItem, UserList};
pub use progress::{MovieProgress, ProgressItem, ShowProgress};
pub use watchlist::{WatchlistItem, WatchlistMovie, WatchlistShow};

/// Identifier of a media entity (movie, show or list) on the tracking service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraktId(pub i64);

impl TraktId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TraktId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for TraktId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of media an item refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Show,
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::Show => write!(f, "show"),
        }
    }
}

/// A media identifier qualified by its kind.
///
/// Movie and show ids live in separate namespaces upstream, so a bare
/// [`TraktId`] is ambiguous wherever both kinds share one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MediaKey {
    pub kind: MediaKind,
    pub id: TraktId,
}

impl MediaKey {
    pub fn new(kind: MediaKind, id: TraktId) -> Self {
        Self { kind, id }
    }

    pub fn movie(id: i64) -> Self {
        Self::new(MediaKind::Movie, TraktId(id))
    }

    pub fn show(id: i64) -> Self {
        Self::new(MediaKind::Show, TraktId(id))
    }
}

impl Display for MediaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Denormalized movie summary carried by cached items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: TraktId,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub released: Option<NaiveDate>,
}

impl Movie {
    /// Creates a movie summary with only the required fields set
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id: TraktId(id),
            title: title.into(),
            year: None,
            rating: None,
            poster: None,
            released: None,
        }
    }

    /// Release date as a UTC timestamp at midnight
    pub fn released_at(&self) -> Option<DateTime<Utc>> {
        self.released
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

/// Denormalized show summary carried by cached items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Show {
    pub id: TraktId,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub first_aired: Option<DateTime<Utc>>,
}

impl Show {
    /// Creates a show summary with only the required fields set
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id: TraktId(id),
            title: title.into(),
            year: None,
            rating: None,
            poster: None,
            first_aired: None,
        }
    }
}
