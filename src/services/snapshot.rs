use serde::{Deserialize, Serialize};
use std::path::Path;

use super::source::CollectionSource;
use crate::{
    error::CacheResult,
    models::{ProgressItem, UserList, WatchlistItem},
};

/// A saved copy of the user's collections
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub watchlist: Vec<WatchlistItem>,
    #[serde(default)]
    pub progress: Vec<ProgressItem>,
    #[serde(default)]
    pub lists: Vec<UserList>,
}

/// Collection source backed by a JSON snapshot
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: Snapshot,
}

impl SnapshotSource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_json(json: &str) -> CacheResult<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub async fn from_path(path: impl AsRef<Path>) -> CacheResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let source = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            watchlist = source.snapshot.watchlist.len(),
            progress = source.snapshot.progress.len(),
            lists = source.snapshot.lists.len(),
            "Loaded snapshot"
        );
        Ok(source)
    }
}

#[async_trait::async_trait]
impl CollectionSource for SnapshotSource {
    async fn fetch_watchlist(&self) -> CacheResult<Vec<WatchlistItem>> {
        Ok(self.snapshot.watchlist.clone())
    }

    async fn fetch_progress(&self) -> CacheResult<Vec<ProgressItem>> {
        Ok(self.snapshot.progress.clone())
    }

    async fn fetch_lists(&self) -> CacheResult<Vec<UserList>> {
        Ok(self.snapshot.lists.clone())
    }

    fn name(&self) -> &'static str {
        "snapshot"
    }
}
