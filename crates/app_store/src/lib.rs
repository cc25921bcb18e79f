//! Invoice Draft Store
//!
//! Holds the one in-progress invoice draft plus everything that outlives
//! it: the finalized-invoice list, the reusable from/to party profiles,
//! and the schedule configuration. Those durable parts are persisted as a
//! single snapshot blob through an injectable [`SnapshotStore`] port; the
//! in-progress draft itself is deliberately excluded from persistence.
//!
//! Persistence is fire-and-forget: mutations succeed in memory first and a
//! failed save is logged, never surfaced as a mutation error. All state
//! transitions are synchronous, in-memory, and single-threaded.

pub mod store;
pub mod storage;
pub mod snapshot;
pub mod error;

pub use store::InvoiceStore;
pub use storage::{SnapshotStore, InMemoryStore, JsonFileStore, StorageError};
pub use snapshot::{StoreSnapshot, ScheduleConfig};
pub use error::StoreError;
