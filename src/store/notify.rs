use chrono::{DateTime, Utc};
use futures::Stream;
use tokio::sync::watch;

/// A change signal emitted by a store.
///
/// Subscribers re-fetch whatever they display; the event carries no delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// Contents changed at the given time
    Updated(DateTime<Utc>),
    /// The store was cleared and its state is unknown
    Invalidated,
}

impl ChangeEvent {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            ChangeEvent::Updated(at) => Some(*at),
            ChangeEvent::Invalidated => None,
        }
    }
}

/// Latest-value broadcast of [`ChangeEvent`]s.
///
/// The channel holds a single slot: a burst of emissions that a subscriber
/// has not observed yet collapses into the newest one.
#[derive(Debug)]
pub struct ChangeNotifier {
    tx: watch::Sender<Option<ChangeEvent>>,
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    pub fn notify_updated(&self) {
        self.emit(ChangeEvent::Updated(Utc::now()));
    }

    pub fn notify_invalidated(&self) {
        self.emit(ChangeEvent::Invalidated);
    }

    fn emit(&self, event: ChangeEvent) {
        // send_replace stores the value even when nobody is subscribed
        self.tx.send_replace(Some(event));
    }

    /// Most recent emission, if any
    pub fn latest(&self) -> Option<ChangeEvent> {
        *self.tx.borrow()
    }

    /// Attaches a new subscriber.
    ///
    /// If anything was emitted before, the subscriber observes the latest
    /// emission first.
    pub fn subscribe(&self) -> ChangeSubscription {
        let mut rx = self.tx.subscribe();
        if rx.borrow().is_some() {
            rx.mark_changed();
        }
        ChangeSubscription { rx }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Receiving side of a [`ChangeNotifier`]
#[derive(Debug)]
pub struct ChangeSubscription {
    rx: watch::Receiver<Option<ChangeEvent>>,
}

impl ChangeSubscription {
    /// Waits for the next unseen emission.
    ///
    /// Returns `None` once the owning store has been dropped.
    pub async fn next(&mut self) -> Option<ChangeEvent> {
        loop {
            if self.rx.changed().await.is_err() {
                return None;
            }
            if let Some(event) = *self.rx.borrow_and_update() {
                return Some(event);
            }
        }
    }

    /// Returns the pending emission without waiting
    pub fn try_next(&mut self) -> Option<ChangeEvent> {
        match self.rx.has_changed() {
            Ok(true) => *self.rx.borrow_and_update(),
            _ => None,
        }
    }

    pub fn into_stream(self) -> impl Stream<Item = ChangeEvent> {
        futures::stream::unfold(self, |mut subscription| async move {
            let event = subscription.next().await?;
            Some((event, subscription))
        })
    }
}
