use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Extracts the cache key of an item
pub trait Keyed {
    type Key: Eq + Hash + Clone + Debug + Send + Sync + 'static;

    fn key(&self) -> Self::Key;
}

/// A sub-collection of a store: a lazily created map from key to item.
///
/// `None` means the collection has not been loaded since creation or the
/// last [`Collection::clear`]. A loaded collection may be empty.
#[derive(Debug, Clone)]
pub struct Collection<T: Keyed> {
    entries: Option<HashMap<T::Key, T>>,
}

impl<T: Keyed> Default for Collection<T> {
    fn default() -> Self {
        Self { entries: None }
    }
}

impl<T: Keyed + Clone> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole map. For duplicate keys the last item wins.
    pub fn set_all(&mut self, items: impl IntoIterator<Item = T>) {
        let entries = items.into_iter().map(|item| (item.key(), item)).collect();
        self.entries = Some(entries);
    }

    /// Merges items into the map, creating it if unloaded
    pub fn add_all(&mut self, items: impl IntoIterator<Item = T>) {
        self.entries
            .get_or_insert_with(HashMap::new)
            .extend(items.into_iter().map(|item| (item.key(), item)));
    }

    /// Removes the given keys, returns how many were present.
    ///
    /// Never loads an unloaded collection.
    pub fn remove<'a>(&mut self, keys: impl IntoIterator<Item = &'a T::Key>) -> usize
    where
        T::Key: 'a,
    {
        let Some(entries) = self.entries.as_mut() else {
            return 0;
        };
        keys.into_iter()
            .filter(|key| entries.remove(*key).is_some())
            .count()
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.entries
            .as_ref()
            .is_some_and(|entries| entries.contains_key(key))
    }

    pub fn is_loaded(&self) -> bool {
        self.entries.is_some()
    }

    /// Snapshot of the current values, empty when unloaded
    pub fn get_all(&self) -> Vec<T> {
        self.entries
            .as_ref()
            .map(|entries| entries.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn get(&self, key: &T::Key) -> Option<T> {
        self.entries.as_ref()?.get(key).cloned()
    }

    pub(crate) fn get_mut(&mut self, key: &T::Key) -> Option<&mut T> {
        self.entries.as_mut()?.get_mut(key)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().flat_map(|entries| entries.values())
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops the map back to unloaded
    pub fn clear(&mut self) {
        self.entries = None;
    }
}
