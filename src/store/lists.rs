use std::collections::HashSet;

use super::collection::Collection;
use super::local::LocalStore;
use super::notify::ChangeSubscription;
use crate::models::{ListItem, MediaKey, TraktId, UserList};

/// Store of the user's personal lists, one entry per list
#[derive(Debug)]
pub struct ListsStore {
    inner: LocalStore<Collection<UserList>>,
}

impl Default for ListsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ListsStore {
    pub fn new() -> Self {
        Self {
            inner: LocalStore::new("lists"),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    pub async fn set_lists(&self, lists: Vec<UserList>, notify: bool) {
        let count = lists.len();
        self.inner.write(notify, |state| state.set_all(lists)).await;
        tracing::debug!(store = self.name(), count, notify, "Set lists");
    }

    pub async fn add_lists(&self, lists: Vec<UserList>, notify: bool) {
        let count = lists.len();
        self.inner.write(notify, |state| state.add_all(lists)).await;
        tracing::debug!(store = self.name(), count, notify, "Added lists");
    }

    pub async fn remove_lists(&self, ids: &HashSet<TraktId>, notify: bool) {
        let removed = self.inner.write(notify, |state| state.remove(ids)).await;
        tracing::debug!(
            store = self.name(),
            requested = ids.len(),
            removed,
            notify,
            "Removed lists"
        );
    }

    pub async fn contains_list(&self, id: TraktId) -> bool {
        self.inner.read(|state| state.contains(&id)).await
    }

    pub async fn is_loaded(&self) -> bool {
        self.inner.read(|state| state.is_loaded()).await
    }

    pub async fn get_all(&self) -> Vec<UserList> {
        self.inner.read(|state| state.get_all()).await
    }

    /// Ordered entries of one list
    pub async fn get_list(&self, id: TraktId) -> Option<Vec<ListItem>> {
        self.inner
            .read(|state| state.get(&id).map(|list| list.items))
            .await
    }

    pub async fn len(&self) -> usize {
        self.inner.read(|state| state.len()).await
    }

    /// Appends items to a cached list; entries sharing a media key are
    /// replaced in place.
    ///
    /// Returns `false` without touching the store or notifying when the list
    /// is not cached.
    pub async fn add_list_items(
        &self,
        list_id: TraktId,
        items: Vec<ListItem>,
        notify: bool,
    ) -> bool {
        let count = items.len();
        let updated = self
            .inner
            .try_write(notify, |state| {
                state.get_mut(&list_id).map(|list| list.upsert_items(items))
            })
            .await
            .is_some();
        tracing::debug!(
            store = self.name(),
            list_id = %list_id,
            count,
            updated,
            "Added list items"
        );
        updated
    }

    /// Removes entries from a cached list, returns whether the list exists
    pub async fn remove_list_items(
        &self,
        list_id: TraktId,
        keys: &[MediaKey],
        notify: bool,
    ) -> bool {
        let result = self
            .inner
            .try_write(notify, |state| {
                state.get_mut(&list_id).map(|list| list.remove_items(keys))
            })
            .await;
        tracing::debug!(
            store = self.name(),
            list_id = %list_id,
            removed = ?result,
            "Removed list items"
        );
        result.is_some()
    }

    /// Ids of cached lists holding the given media, ascending
    pub async fn lists_containing(&self, key: MediaKey) -> Vec<TraktId> {
        let mut ids: Vec<TraktId> = self
            .inner
            .read(|state| {
                state
                    .values()
                    .filter(|list| list.contains(&key))
                    .map(|list| list.id)
                    .collect()
            })
            .await;
        ids.sort();
        ids
    }

    pub async fn clear(&self) {
        self.inner.clear().await;
    }

    pub fn subscribe(&self) -> ChangeSubscription {
        self.inner.subscribe()
    }
}
