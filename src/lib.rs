//! Session-scoped, in-memory caches of a media-tracking user's watchlist,
//! watch progress and personal lists.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod store;
pub mod telemetry;

pub use config::Config;
pub use error::{CacheError, CacheResult};
pub use session::{SessionId, UserSession};
pub use store::{ChangeEvent, ChangeSubscription, ListsStore, ProgressStore, WatchlistStore};
