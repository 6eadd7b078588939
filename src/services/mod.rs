pub mod snapshot;
pub mod source;
pub mod sync;

pub use snapshot::{Snapshot, SnapshotSource};
pub use source::CollectionSource;
pub use sync::{SyncService, SyncSummary};
