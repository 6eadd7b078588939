use std::sync::Arc;

use tracing::instrument;

use super::source::CollectionSource;
use crate::{error::CacheResult, session::UserSession};

/// Number of items loaded into each store by [`SyncService::refresh_all`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub watchlist: usize,
    pub progress: usize,
    pub lists: usize,
}

/// Populates a session's stores from a [`CollectionSource`]
///
/// A failed fetch leaves the corresponding store exactly as it was.
pub struct SyncService {
    source: Arc<dyn CollectionSource>,
    session: UserSession,
}

impl SyncService {
    pub fn new(source: Arc<dyn CollectionSource>, session: UserSession) -> Self {
        Self { source, session }
    }

    pub fn session(&self) -> &UserSession {
        &self.session
    }

    /// Replaces the cached watchlist, returns the number of items loaded
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn refresh_watchlist(&self, notify: bool) -> CacheResult<usize> {
        let items = self.source.fetch_watchlist().await?;
        let count = items.len();
        self.session.watchlist().set_items(items, notify).await;
        tracing::debug!(count, "Watchlist refreshed");
        Ok(count)
    }

    /// Replaces the cached progress, returns the number of items loaded
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn refresh_progress(&self, notify: bool) -> CacheResult<usize> {
        let items = self.source.fetch_progress().await?;
        let count = items.len();
        self.session.progress().set_items(items, notify).await;
        tracing::debug!(count, "Progress refreshed");
        Ok(count)
    }

    /// Replaces the cached lists, returns the number of lists loaded
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn refresh_lists(&self, notify: bool) -> CacheResult<usize> {
        let lists = self.source.fetch_lists().await?;
        let count = lists.len();
        self.session.lists().set_lists(lists, notify).await;
        tracing::debug!(count, "Lists refreshed");
        Ok(count)
    }

    /// Refreshes every store concurrently.
    ///
    /// Every refresh runs to completion even if another fails; the first
    /// failure is returned after all of them finish.
    pub async fn refresh_all(&self, notify: bool) -> CacheResult<SyncSummary> {
        let (watchlist, progress, lists) = tokio::join!(
            self.refresh_watchlist(notify),
            self.refresh_progress(notify),
            self.refresh_lists(notify)
        );

        let mut errors = Vec::new();
        let mut summary = SyncSummary::default();

        match watchlist {
            Ok(count) => summary.watchlist = count,
            Err(e) => errors.push(("watchlist", e)),
        }
        match progress {
            Ok(count) => summary.progress = count,
            Err(e) => errors.push(("progress", e)),
        }
        match lists {
            Ok(count) => summary.lists = count,
            Err(e) => errors.push(("lists", e)),
        }

        for (store, e) in &errors {
            tracing::error!(store, error = %e, source = self.source.name(), "Refresh failed");
        }

        if let Some((_, e)) = errors.into_iter().next() {
            return Err(e);
        }

        tracing::info!(
            session_id = %self.session.id(),
            watchlist = summary.watchlist,
            progress = summary.progress,
            lists = summary.lists,
            "Session refreshed"
        );

        Ok(summary)
    }
}
