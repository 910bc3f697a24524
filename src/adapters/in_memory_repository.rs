//! In-memory state repository for testing.
//!
//! Stores serialized caches in a shared map keyed by path, avoiding file
//! system I/O entirely.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{
    Result,
    cache::{SerializedAgent, StateCache},
    error::Error,
    ports::StateRepository,
};

/// In-memory repository. Clones share the same storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of caches currently stored
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    pub fn clear(&self) {
        self.storage().clear();
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(&key(path))
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl StateRepository for InMemoryRepository {
    fn save(&self, cache: &StateCache, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec(&cache.serialize()).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize state cache for in-memory storage".to_string(),
                message: e.to_string(),
            }
        })?;

        self.storage().insert(key(path), bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<StateCache> {
        let storage = self.storage();
        let bytes = storage.get(&key(path)).ok_or_else(|| Error::Io {
            operation: format!("load state cache from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        let data: SerializedAgent =
            serde_json::from_slice(bytes).map_err(|e| Error::SerializationContext {
                operation: "deserialize state cache from in-memory storage".to_string(),
                message: e.to_string(),
            })?;
        Ok(StateCache::deserialize(data))
    }
}
