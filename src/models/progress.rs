use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MediaKind, Movie, Show, TraktId};
use crate::store::Keyed;

/// Playback progress of a movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieProgress {
    pub movie: Movie,
    /// Percent watched, 0 to 100
    #[serde(default)]
    pub progress: f32,
    #[serde(default)]
    pub paused_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub watched_at: Option<DateTime<Utc>>,
}

impl MovieProgress {
    pub fn new(movie: Movie) -> Self {
        Self {
            movie,
            progress: 0.0,
            paused_at: None,
            watched_at: None,
        }
    }

    pub fn is_watched(&self) -> bool {
        self.watched_at.is_some()
    }
}

/// Episode progress of a show
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowProgress {
    pub show: Show,
    /// Number of aired episodes
    pub aired: u32,
    /// Number of aired episodes the user has watched
    pub completed: u32,
    #[serde(default)]
    pub last_watched_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reset_at: Option<DateTime<Utc>>,
}

impl ShowProgress {
    pub fn new(show: Show, aired: u32, completed: u32) -> Self {
        Self {
            show,
            aired,
            completed,
            last_watched_at: None,
            reset_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.aired > 0 && self.completed >= self.aired
    }

    /// Aired episodes left to watch
    pub fn remaining(&self) -> u32 {
        self.aired.saturating_sub(self.completed)
    }
}

/// Progress entry of either kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressItem {
    Movie(MovieProgress),
    Show(ShowProgress),
}

impl ProgressItem {
    pub fn id(&self) -> TraktId {
        match self {
            ProgressItem::Movie(item) => item.movie.id,
            ProgressItem::Show(item) => item.show.id,
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            ProgressItem::Movie(_) => MediaKind::Movie,
            ProgressItem::Show(_) => MediaKind::Show,
        }
    }
}

impl From<MovieProgress> for ProgressItem {
    fn from(item: MovieProgress) -> Self {
        ProgressItem::Movie(item)
    }
}

impl From<ShowProgress> for ProgressItem {
    fn from(item: ShowProgress) -> Self {
        ProgressItem::Show(item)
    }
}

impl Keyed for MovieProgress {
    type Key = TraktId;

    fn key(&self) -> TraktId {
        self.movie.id
    }
}

impl Keyed for ShowProgress {
    type Key = TraktId;

    fn key(&self) -> TraktId {
        self.show.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_progress_completion() {
        let show = Show::new(1, "The Wire");
        assert!(!ShowProgress::new(show.clone(), 0, 0).is_completed());
        assert!(!ShowProgress::new(show.clone(), 60, 59).is_completed());
        assert!(ShowProgress::new(show, 60, 60).is_completed());
    }

    #[test]
    fn test_show_progress_remaining_saturates() {
        let progress = ShowProgress::new(Show::new(1, "The Wire"), 10, 12);
        assert_eq!(progress.remaining(), 0);
    }

    #[test]
    fn test_movie_progress_watched() {
        let mut progress = MovieProgress::new(Movie::new(2, "Arrival"));
        assert!(!progress.is_watched());
        progress.watched_at = Some(Utc::now());
        assert!(progress.is_watched());
    }

    #[test]
    fn test_progress_item_deserializes_by_type() {
        let json = r#"{"type": "show", "show": {"id": 4, "title": "Lost"}, "aired": 121, "completed": 3}"#;
        let item: ProgressItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id(), TraktId(4));
        assert_eq!(item.kind(), MediaKind::Show);
    }
}
