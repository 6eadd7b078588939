//! In-memory mirrors of the signed-in user's collections.
//!
//! Each store serializes every operation behind one async mutex and
//! broadcasts a [`ChangeEvent`] to subscribers when asked to, or always on
//! [`clear`](LocalStore::clear). Stores hold whatever they were last told;
//! there is no eviction and nothing is persisted.

pub mod collection;
pub mod lists;
pub mod local;
pub mod media;
pub mod notify;

pub use collection::{Collection, Keyed};
pub use lists::ListsStore;
pub use local::LocalStore;
pub use media::{MediaCollections, MediaStore, ProgressStore, WatchlistStore};
pub use notify::{ChangeEvent, ChangeNotifier, ChangeSubscription};
