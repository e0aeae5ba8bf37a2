//! Browser localStorage as a [`KeyValueStore`].

use anyhow::anyhow;
use lad_dashboard::KeyValueStore;
use web_sys::{window, Storage};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let storage = Self::storage().ok_or_else(|| anyhow!("localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| anyhow!("Failed to store {}: {:?}", key, e))
    }
}
