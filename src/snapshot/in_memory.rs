use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::store::SnapshotStore;
use super::SnapshotError;

/// In-memory snapshot store backed by `Arc<RwLock<HashMap>>`.
///
/// Clone-friendly (cloning shares the same underlying storage).
#[derive(Clone, Default)]
pub struct InMemorySnapshotStore {
    storage: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| SnapshotError::LockPoisoned("snapshot read"))?;
        Ok(storage.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SnapshotError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| SnapshotError::LockPoisoned("snapshot write"))?;
        storage.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<bool, SnapshotError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| SnapshotError::LockPoisoned("snapshot write"))?;
        Ok(storage.remove(key).is_some())
    }
}
