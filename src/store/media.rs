use std::collections::HashSet;

use super::collection::{Collection, Keyed};
use super::local::LocalStore;
use super::notify::ChangeSubscription;
use crate::models::{
    MovieProgress, ProgressItem, ShowProgress, TraktId, WatchlistItem, WatchlistMovie,
    WatchlistShow,
};

/// Movies and shows kept as two independently loaded maps under one lock
#[derive(Debug)]
pub struct MediaCollections<M: Keyed, S: Keyed> {
    pub movies: Collection<M>,
    pub shows: Collection<S>,
}

impl<M: Keyed, S: Keyed> Default for MediaCollections<M, S> {
    fn default() -> Self {
        Self {
            movies: Collection::default(),
            shows: Collection::default(),
        }
    }
}

/// Store of a user collection split by media kind.
///
/// Instantiated as [`WatchlistStore`] and [`ProgressStore`].
#[derive(Debug)]
pub struct MediaStore<M: Keyed, S: Keyed> {
    inner: LocalStore<MediaCollections<M, S>>,
}

/// The user's watchlist
pub type WatchlistStore = MediaStore<WatchlistMovie, WatchlistShow>;

/// The user's watch progress
pub type ProgressStore = MediaStore<MovieProgress, ShowProgress>;

impl<M, S> MediaStore<M, S>
where
    M: Keyed<Key = TraktId> + Clone,
    S: Keyed<Key = TraktId> + Clone,
{
    pub fn with_name(name: &'static str) -> Self {
        Self {
            inner: LocalStore::new(name),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    pub async fn set_movies(&self, movies: Vec<M>, notify: bool) {
        let count = movies.len();
        self.inner.write(notify, |state| state.movies.set_all(movies)).await;
        tracing::debug!(store = self.name(), count, notify, "Set movies");
    }

    pub async fn add_movies(&self, movies: Vec<M>, notify: bool) {
        let count = movies.len();
        self.inner.write(notify, |state| state.movies.add_all(movies)).await;
        tracing::debug!(store = self.name(), count, notify, "Added movies");
    }

    pub async fn remove_movies(&self, ids: &HashSet<TraktId>, notify: bool) {
        let removed = self.inner.write(notify, |state| state.movies.remove(ids)).await;
        tracing::debug!(
            store = self.name(),
            requested = ids.len(),
            removed,
            notify,
            "Removed movies"
        );
    }

    pub async fn contains_movie(&self, id: TraktId) -> bool {
        self.inner.read(|state| state.movies.contains(&id)).await
    }

    pub async fn is_movies_loaded(&self) -> bool {
        self.inner.read(|state| state.movies.is_loaded()).await
    }

    pub async fn get_movies(&self) -> Vec<M> {
        self.inner.read(|state| state.movies.get_all()).await
    }

    pub async fn get_movie(&self, id: TraktId) -> Option<M> {
        self.inner.read(|state| state.movies.get(&id)).await
    }

    pub async fn set_shows(&self, shows: Vec<S>, notify: bool) {
        let count = shows.len();
        self.inner.write(notify, |state| state.shows.set_all(shows)).await;
        tracing::debug!(store = self.name(), count, notify, "Set shows");
    }

    pub async fn add_shows(&self, shows: Vec<S>, notify: bool) {
        let count = shows.len();
        self.inner.write(notify, |state| state.shows.add_all(shows)).await;
        tracing::debug!(store = self.name(), count, notify, "Added shows");
    }

    pub async fn remove_shows(&self, ids: &HashSet<TraktId>, notify: bool) {
        let removed = self.inner.write(notify, |state| state.shows.remove(ids)).await;
        tracing::debug!(
            store = self.name(),
            requested = ids.len(),
            removed,
            notify,
            "Removed shows"
        );
    }

    pub async fn contains_show(&self, id: TraktId) -> bool {
        self.inner.read(|state| state.shows.contains(&id)).await
    }

    pub async fn is_shows_loaded(&self) -> bool {
        self.inner.read(|state| state.shows.is_loaded()).await
    }

    pub async fn get_shows(&self) -> Vec<S> {
        self.inner.read(|state| state.shows.get_all()).await
    }

    pub async fn get_show(&self, id: TraktId) -> Option<S> {
        self.inner.read(|state| state.shows.get(&id)).await
    }

    /// Replaces movies and shows together, emitting at most one update
    pub async fn replace(&self, movies: Vec<M>, shows: Vec<S>, notify: bool) {
        let (movie_count, show_count) = (movies.len(), shows.len());
        self.inner
            .write(notify, |state| {
                state.movies.set_all(movies);
                state.shows.set_all(shows);
            })
            .await;
        tracing::debug!(
            store = self.name(),
            movie_count,
            show_count,
            notify,
            "Replaced collection"
        );
    }

    /// True once both movies and shows have been loaded
    pub async fn is_loaded(&self) -> bool {
        self.inner
            .read(|state| state.movies.is_loaded() && state.shows.is_loaded())
            .await
    }

    /// Number of cached movies and shows
    pub async fn len(&self) -> (usize, usize) {
        self.inner
            .read(|state| (state.movies.len(), state.shows.len()))
            .await
    }

    pub async fn clear(&self) {
        self.inner.clear().await;
    }

    pub fn subscribe(&self) -> ChangeSubscription {
        self.inner.subscribe()
    }

    /// All movies followed by all shows, taken in one critical section
    async fn collect_all<I>(&self) -> Vec<I>
    where
        I: From<M> + From<S>,
    {
        self.inner
            .read(|state| {
                state
                    .movies
                    .values()
                    .cloned()
                    .map(<I as From<M>>::from)
                    .chain(state.shows.values().cloned().map(<I as From<S>>::from))
                    .collect()
            })
            .await
    }
}

impl WatchlistStore {
    pub fn new() -> Self {
        Self::with_name("watchlist")
    }

    pub async fn get_all(&self) -> Vec<WatchlistItem> {
        self.collect_all().await
    }

    /// Replaces the whole watchlist from a mixed list of items
    pub async fn set_items(&self, items: Vec<WatchlistItem>, notify: bool) {
        let mut movies = Vec::new();
        let mut shows = Vec::new();
        for item in items {
            match item {
                WatchlistItem::Movie(movie) => movies.push(movie),
                WatchlistItem::Show(show) => shows.push(show),
            }
        }
        self.replace(movies, shows, notify).await;
    }
}

impl Default for WatchlistStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::with_name("progress")
    }

    pub async fn get_all(&self) -> Vec<ProgressItem> {
        self.collect_all().await
    }

    /// Replaces all progress from a mixed list of items
    pub async fn set_items(&self, items: Vec<ProgressItem>, notify: bool) {
        let mut movies = Vec::new();
        let mut shows = Vec::new();
        for item in items {
            match item {
                ProgressItem::Movie(movie) => movies.push(movie),
                ProgressItem::Show(show) => shows.push(show),
            }
        }
        self.replace(movies, shows, notify).await;
    }
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}
