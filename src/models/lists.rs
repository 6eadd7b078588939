use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MediaKey, MediaKind, Movie, Show, TraktId};
use crate::store::Keyed;

/// One entry of a personal list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListItem {
    Movie {
        movie: Movie,
        listed_at: DateTime<Utc>,
        #[serde(default)]
        rank: Option<u32>,
    },
    Show {
        show: Show,
        listed_at: DateTime<Utc>,
        #[serde(default)]
        rank: Option<u32>,
    },
}

impl ListItem {
    pub fn movie(movie: Movie, listed_at: DateTime<Utc>) -> Self {
        ListItem::Movie {
            movie,
            listed_at,
            rank: None,
        }
    }

    pub fn show(show: Show, listed_at: DateTime<Utc>) -> Self {
        ListItem::Show {
            show,
            listed_at,
            rank: None,
        }
    }

    pub fn media_key(&self) -> MediaKey {
        match self {
            ListItem::Movie { movie, .. } => MediaKey::new(MediaKind::Movie, movie.id),
            ListItem::Show { show, .. } => MediaKey::new(MediaKind::Show, show.id),
        }
    }

    pub fn listed_at(&self) -> DateTime<Utc> {
        match self {
            ListItem::Movie { listed_at, .. } | ListItem::Show { listed_at, .. } => *listed_at,
        }
    }
}

/// A user-defined list and its ordered entries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserList {
    pub id: TraktId,
    #[serde(default)]
    pub items: Vec<ListItem>,
}

impl UserList {
    pub fn new(id: i64, items: Vec<ListItem>) -> Self {
        Self {
            id: TraktId(id),
            items,
        }
    }

    pub fn contains(&self, key: &MediaKey) -> bool {
        self.items.iter().any(|item| item.media_key() == *key)
    }

    /// Appends items, replacing entries that share a media key in place
    pub fn upsert_items(&mut self, items: Vec<ListItem>) {
        for item in items {
            let key = item.media_key();
            match self.items.iter_mut().find(|existing| existing.media_key() == key) {
                Some(existing) => *existing = item,
                None => self.items.push(item),
            }
        }
    }

    /// Removes entries whose media key is in `keys`, returns how many were dropped
    pub fn remove_items(&mut self, keys: &[MediaKey]) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !keys.contains(&item.media_key()));
        before - self.items.len()
    }
}

impl Keyed for UserList {
    type Key = TraktId;

    fn key(&self) -> TraktId {
        self.id
    }
}
