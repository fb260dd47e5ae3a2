use std::collections::HashMap;
use std::sync::Mutex;

use super::KvStore;
use crate::error::Result;

/// In-memory store used as a test double and for ephemeral deployments.
/// Implements the same interface as [`SqliteKv`](super::SqliteKv) with no
/// durability.
#[derive(Default)]
pub struct MemoryKv {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    kv: HashMap<Vec<u8>, Vec<u8>>,
    hashes: HashMap<String, HashMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryKv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn inner(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.inner().kv.get(key).cloned())
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.inner().kv.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<bool> {
        Ok(self.inner().kv.remove(key).is_some())
    }

    fn hget(&self, table: &str, field: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self
            .inner()
            .hashes
            .get(table)
            .and_then(|h| h.get(field))
            .cloned())
    }

    fn hset(&self, table: &str, field: &[u8], value: &[u8]) -> Result<()> {
        self.inner()
            .hashes
            .entry(table.to_string())
            .or_default()
            .insert(field.to_vec(), value.to_vec());
        Ok(())
    }

    fn hdel(&self, table: &str, field: &[u8]) -> Result<bool> {
        Ok(self
            .inner()
            .hashes
            .get_mut(table)
            .is_some_and(|h| h.remove(field).is_some()))
    }
}
