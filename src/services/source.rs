use crate::{
    error::CacheResult,
    models::{ProgressItem, UserList, WatchlistItem},
};

/// Upstream supplier of the user's collections
///
/// Implementations wrap whatever already holds parsed items: the tracking
/// service's REST client, an on-device database, or a snapshot file. Stores
/// never call a source themselves; [`SyncService`](super::SyncService) moves
/// items from a source into a session.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CollectionSource: Send + Sync {
    /// Every movie and show on the user's watchlist
    async fn fetch_watchlist(&self) -> CacheResult<Vec<WatchlistItem>>;

    /// Watch progress of every movie and show the user has started
    async fn fetch_progress(&self) -> CacheResult<Vec<ProgressItem>>;

    /// The user's personal lists with their entries
    async fn fetch_lists(&self) -> CacheResult<Vec<UserList>>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}
