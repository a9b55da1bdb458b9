use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::marketplace::MarketplaceStore;
use crate::storage::{KeyValueStore, MemoryStore, StorageError, JOBS_KEY};

pub(super) use crate::test_support::{authoriser, draft, worker, ReadOnlyStore};

/// Store opened on fresh storage, so it carries the three demo listings.
pub(super) fn seeded_store() -> (MarketplaceStore<MemoryStore>, Arc<MemoryStore>) {
    let storage = Arc::new(MemoryStore::default());
    let store = MarketplaceStore::bootstrap(storage.clone()).expect("store bootstraps");
    (store, storage)
}

/// Store opened on storage with an empty job collection, so nothing is seeded.
pub(super) fn empty_store() -> (MarketplaceStore<MemoryStore>, Arc<MemoryStore>) {
    let storage = Arc::new(MemoryStore::default());
    storage.write(JOBS_KEY, "[]").expect("raw write");
    let store = MarketplaceStore::bootstrap(storage.clone()).expect("store bootstraps");
    (store, storage)
}

/// Memory-backed store whose writes can be switched off mid-test.
#[derive(Default)]
pub(super) struct SwitchableStore {
    inner: MemoryStore,
    failing: AtomicBool,
}

impl SwitchableStore {
    pub(super) fn fail_writes(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

impl KeyValueStore for SwitchableStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("disk full".to_string()));
        }
        self.inner.write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}
