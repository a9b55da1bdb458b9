use std::sync::Arc;

use crate::identity::{AccountCandidate, IdentityStore};
use crate::storage::{KeyValueStore, MemoryStore, StorageError, SESSION_KEY};

pub(super) use crate::test_support::ReadOnlyStore;

pub(super) fn asha() -> AccountCandidate {
    AccountCandidate::worker("Asha", "9000000001", "asha-secret", "Mumbai")
}

pub(super) fn royal_caterers() -> AccountCandidate {
    AccountCandidate::authoriser(
        "Rajesh Kumar",
        "9000000001",
        "royal-secret",
        "Mumbai",
        "Royal Caterers",
    )
}

pub(super) fn open_store() -> (IdentityStore<MemoryStore>, Arc<MemoryStore>) {
    let storage = Arc::new(MemoryStore::default());
    let store = IdentityStore::open(storage.clone()).expect("empty store opens");
    (store, storage)
}

/// Delegates to a shared [`MemoryStore`] but refuses to write the session.
pub(super) struct SessionlessStore {
    pub(super) inner: MemoryStore,
}

impl KeyValueStore for SessionlessStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == SESSION_KEY {
            return Err(StorageError::Unavailable("session".to_string()));
        }
        self.inner.write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}
