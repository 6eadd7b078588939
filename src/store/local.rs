use tokio::sync::Mutex;

use super::notify::{ChangeNotifier, ChangeSubscription};

/// Lock discipline shared by every store.
///
/// All reads and writes go through one async mutex around the store state.
/// Closures passed to [`LocalStore::read`] and [`LocalStore::write`] run
/// synchronously while the lock is held, so a caller cancelled while waiting
/// for the lock leaves the state untouched and no caller can observe a
/// half-applied write.
#[derive(Debug)]
pub struct LocalStore<S> {
    name: &'static str,
    state: Mutex<S>,
    notifier: ChangeNotifier,
}

impl<S: Default> LocalStore<S> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(S::default()),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub async fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let state = self.state.lock().await;
        f(&state)
    }

    /// Applies `f` under the lock, then emits an update if `notify` is set
    pub async fn write<R>(&self, notify: bool, f: impl FnOnce(&mut S) -> R) -> R {
        let mut state = self.state.lock().await;
        let result = f(&mut state);
        if notify {
            self.notifier.notify_updated();
        }
        result
    }

    /// Like [`LocalStore::write`], but only emits when `f` returns `Some`
    pub async fn try_write<R>(
        &self,
        notify: bool,
        f: impl FnOnce(&mut S) -> Option<R>,
    ) -> Option<R> {
        let mut state = self.state.lock().await;
        let result = f(&mut state);
        if notify && result.is_some() {
            self.notifier.notify_updated();
        }
        result
    }

    /// Resets every sub-collection to unloaded and emits an invalidation
    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        *state = S::default();
        self.notifier.notify_invalidated();
        tracing::debug!(store = self.name, "Store cleared");
    }

    pub fn subscribe(&self) -> ChangeSubscription {
        self.notifier.subscribe()
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }
}
