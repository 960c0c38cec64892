//! Locally persisted favorites and watchlist.

pub mod storage;
pub mod store;

pub use storage::{FileStorage, MemoryStorage, StorageError, StoragePort};
pub use store::{MembershipError, MembershipStore};
