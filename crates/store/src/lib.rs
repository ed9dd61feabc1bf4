//! `mayanfruit-store` — the in-memory record store.
//!
//! Seven independent collections behind one explicitly-constructed facade:
//! no global singleton, no persistence, no cross-collection referential
//! integrity. Pages read a cloned snapshot at mount time and write back
//! through the facade; every successful mutation is announced on an
//! in-process change bus so other live views can re-read.

pub mod collection;
pub mod notify;
pub mod seed;
pub mod snapshot;
pub mod store;

pub use collection::Collection;
pub use notify::{ChangeBus, ChangeKind, CollectionKind, StoreChange, Subscription};
pub use snapshot::{Snapshot, SnapshotError};
pub use store::DataStore;
