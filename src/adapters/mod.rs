// Adapters layer: concrete key-value stores and the repository built on them.

pub mod local_storage;
pub mod stores;

pub use local_storage::{LocalStorageRepository, STORAGE_KEY};
pub use stores::{FileStore, MemoryStore};
