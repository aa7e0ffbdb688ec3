//! Key-Value Storage
//!
//! Persistence seam for the stores. `BrowserStorage` writes JSON into
//! `window.localStorage`; `MemoryStorage` keeps the same JSON in a map. It
//! backs the native tests and stands in when the browser denies storage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("malformed value under `{key}`: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous JSON key-value store
pub trait KeyValueStore {
    /// `Ok(None)` when the key is absent, `Err(Malformed)` when it does not decode as `T`
    fn read<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>>;

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn read<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        use gloo_storage::errors::StorageError as GlooError;
        use gloo_storage::{LocalStorage, Storage};

        match LocalStorage::get::<T>(key) {
            Ok(value) => Ok(Some(value)),
            Err(GlooError::KeyNotFound(_)) => Ok(None),
            Err(GlooError::SerdeError(source)) => Err(StorageError::Malformed {
                key: key.to_string(),
                source,
            }),
            Err(GlooError::JsError(e)) => Err(StorageError::Unavailable(e.to_string())),
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::set(key, value).map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

/// In-memory storage; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw string as-is, bypassing JSON encoding
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.entries().insert(key.to_string(), raw.to_string());
    }

    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStorage {
    fn read<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let Some(raw) = self.get_raw(key) else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Malformed {
                key: key.to_string(),
                source,
            })
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let raw = serde_json::to_string(value).map_err(|e| StorageError::Unavailable(e.to_string()))?;
        self.entries().insert(key.to_string(), raw);
        Ok(())
    }
}

/// Storage picked at startup: the browser's when reachable, memory otherwise
#[derive(Debug, Clone)]
pub enum AppStorage {
    Browser(BrowserStorage),
    Memory(MemoryStorage),
}

impl AppStorage {
    /// Private browsing or sandboxed frames may deny `localStorage`; the app
    /// then keeps working for the session without persistence.
    pub fn detect() -> Self {
        let available = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .is_some();
        if available {
            AppStorage::Browser(BrowserStorage)
        } else {
            log::warn!("[STORAGE] localStorage unavailable, state will not persist");
            AppStorage::Memory(MemoryStorage::new())
        }
    }
}

impl KeyValueStore for AppStorage {
    fn read<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match self {
            AppStorage::Browser(s) => s.read(key),
            AppStorage::Memory(s) => s.read(key),
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        match self {
            AppStorage::Browser(s) => s.write(key, value),
            AppStorage::Memory(s) => s.write(key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let storage = MemoryStorage::new();
        storage.write("numbers", &vec![1, 2, 3]).unwrap();

        let loaded: Option<Vec<i32>> = storage.read("numbers").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));
        assert_eq!(storage.get_raw("numbers").as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_missing_key_is_none() {
        let storage = MemoryStorage::new();
        let loaded: Option<bool> = storage.read("theme").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_value() {
        let storage = MemoryStorage::new();
        storage.insert_raw("tasks", "{not json");

        let err = storage.read::<Vec<i32>>("tasks").unwrap_err();
        assert!(matches!(err, StorageError::Malformed { ref key, .. } if key == "tasks"));
    }

    #[test]
    fn test_app_storage_delegates() {
        let memory = MemoryStorage::new();
        let storage = AppStorage::Memory(memory.clone());

        storage.write("tasks", &Vec::<u32>::new()).unwrap();
        assert_eq!(memory.get_raw("tasks").as_deref(), Some("[]"));
        memory.insert_raw("theme", "true");
        assert_eq!(storage.read::<bool>("theme").unwrap(), Some(true));
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.write("flag", &true).unwrap();
        assert_eq!(other.read::<bool>("flag").unwrap(), Some(true));

        other.write("flag", &false).unwrap();
        assert_eq!(storage.get_raw("flag").as_deref(), Some("false"));
    }
}
