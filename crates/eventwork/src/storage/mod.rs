//! Named-collection persistence shared by the identity and marketplace stores.
//!
//! Every collection is stored as a single JSON document under a fixed key and is
//! read and written whole. Stores receive a [`KeyValueStore`] at construction so
//! the same code runs against the in-memory backend in tests and the file
//! backend in the CLI.

mod file;
mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Registered accounts, in signup order.
pub const ACCOUNTS_KEY: &str = "eventwork_users";
/// Snapshot of the signed-in account, absent when nobody is signed in.
pub const SESSION_KEY: &str = "eventwork_session";
/// Job listings, newest first.
pub const JOBS_KEY: &str = "eventwork_jobs";
/// Applications, newest first.
pub const APPLICATIONS_KEY: &str = "eventwork_applications";

/// Raw key/value seam over a durable medium.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Error enumeration for persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access collection '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("collection '{key}' could not be encoded or decoded: {source}")]
    Encoding {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Read and decode a whole collection, returning `None` when it was never written.
pub fn load_collection<S, T>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = store.read(key)? else {
        debug!(key, "collection absent");
        return Ok(None);
    };

    let value = serde_json::from_str(&raw).map_err(|source| StorageError::Encoding {
        key: key.to_string(),
        source,
    })?;
    debug!(key, bytes = raw.len(), "collection loaded");
    Ok(Some(value))
}

/// Encode and overwrite a whole collection.
pub fn save_collection<S, T>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encoding {
        key: key.to_string(),
        source,
    })?;
    store.write(key, &raw)?;
    debug!(key, bytes = raw.len(), "collection saved");
    Ok(())
}
