use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{KeyValueStore, StorageError};

/// Process-local backend. Clones share the same entries, which lets tests reopen a
/// store against state written by an earlier instance.
#[derive(Default, Clone)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.entries()?.contains_key(key))
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store mutex poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let store = MemoryStore::default();
        let reopened = store.clone();
        store.write("k", "v").expect("write");

        assert_eq!(reopened.read("k").expect("read"), Some("v".to_string()));
        reopened.remove("k").expect("remove");
        assert!(!store.contains("k").expect("lookup"));
    }

    #[test]
    fn poisoned_lock_is_reported_as_unavailable() {
        let store = MemoryStore::default();
        let shared = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.entries.lock().expect("first lock");
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(
            store.contains("k"),
            Err(StorageError::Unavailable(_))
        ));
        assert!(matches!(store.read("k"), Err(StorageError::Unavailable(_))));
    }
}
