use std::sync::Arc;

use uuid::Uuid;

use crate::store::{ListsStore, ProgressStore, WatchlistStore};

/// Identifier of one signed-in session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Creates a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The stores belonging to one signed-in user.
///
/// Built at sign-in and handed to whoever needs the stores. Cloning shares
/// the same store instances.
#[derive(Clone, Debug)]
pub struct UserSession {
    id: SessionId,
    watchlist: Arc<WatchlistStore>,
    progress: Arc<ProgressStore>,
    lists: Arc<ListsStore>,
}

impl Default for UserSession {
    fn default() -> Self {
        Self::new()
    }
}

impl UserSession {
    pub fn new() -> Self {
        let session = Self {
            id: SessionId::new(),
            watchlist: Arc::new(WatchlistStore::new()),
            progress: Arc::new(ProgressStore::new()),
            lists: Arc::new(ListsStore::new()),
        };
        tracing::info!(session_id = %session.id, "User session started");
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn watchlist(&self) -> &Arc<WatchlistStore> {
        &self.watchlist
    }

    pub fn progress(&self) -> &Arc<ProgressStore> {
        &self.progress
    }

    pub fn lists(&self) -> &Arc<ListsStore> {
        &self.lists
    }

    /// Clears every store, notifying their subscribers
    pub async fn sign_out(&self) {
        tokio::join!(
            self.watchlist.clear(),
            self.progress.clear(),
            self.lists.clear()
        );
        tracing::info!(session_id = %self.id, "User session cleared");
    }
}
