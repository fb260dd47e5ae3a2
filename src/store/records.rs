use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::KvStore;
use crate::error::{Error, Result};

/// RecordStore persists full entity snapshots by identifier. Every save is a
/// whole-record replace; there are no partial-field updates.
pub struct RecordStore {
    store: Arc<dyn KvStore>,
}

impl RecordStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn save<T: Serialize>(&self, id: &str, record: &T) -> Result<()> {
        let payload = serde_json::to_vec(record)?;
        self.store.set(id.as_bytes(), &payload)
    }

    pub fn load<T: DeserializeOwned>(&self, id: &str) -> Result<T> {
        let payload = self.store.get(id.as_bytes())?.ok_or(Error::NotFound)?;
        Ok(serde_json::from_slice(&payload)?)
    }
}
