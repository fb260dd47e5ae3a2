use std::sync::Arc;

use super::KvStore;
use crate::error::Result;

/// Entity kinds that carry a secondary name index. Each kind owns one active
/// hash table and one parallel tombstone table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Repository,
    Tag,
}

impl Kind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Repository => "repository",
            Kind::Tag => "tag",
        }
    }

    const fn table(self) -> &'static str {
        match self {
            Kind::Repository => "index:repository",
            Kind::Tag => "index:tag",
        }
    }

    const fn tombstone_table(self) -> &'static str {
        match self {
            Kind::Repository => "index:repository:removed",
            Kind::Tag => "index:tag:removed",
        }
    }
}

/// NameIndex maps a composite natural key (e.g. `namespace:name`) to the
/// identifier owning it, per entity kind.
pub struct NameIndex {
    store: Arc<dyn KvStore>,
}

impl NameIndex {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn lookup(&self, kind: Kind, natural_key: &str) -> Result<Option<String>> {
        let value = self.store.hget(kind.table(), natural_key.as_bytes())?;
        Ok(value.map(|v| String::from_utf8_lossy(&v).into_owned()))
    }

    /// Idempotent upsert of the active mapping.
    pub fn register(&self, kind: Kind, natural_key: &str, id: &str) -> Result<()> {
        self.store
            .hset(kind.table(), natural_key.as_bytes(), id.as_bytes())
    }

    /// Moves the mapping into the kind's tombstone table, then deletes it
    /// from the active table. Returns false without writing when the key is
    /// not registered.
    ///
    /// The two writes are not atomic: a failure between them leaves the key
    /// present in both tables. This gap is inherent to the store interface
    /// (no multi-key transactions) and is accepted rather than masked; what
    /// a concurrent reader observes during the gap is undefined.
    pub fn retract(&self, kind: Kind, natural_key: &str) -> Result<bool> {
        let Some(id) = self.lookup(kind, natural_key)? else {
            return Ok(false);
        };
        self.store
            .hset(kind.tombstone_table(), natural_key.as_bytes(), id.as_bytes())?;
        self.store.hdel(kind.table(), natural_key.as_bytes())?;
        Ok(true)
    }

    /// Reads the tombstoned mapping for a retracted key, if any.
    pub fn tombstone(&self, kind: Kind, natural_key: &str) -> Result<Option<String>> {
        let value = self
            .store
            .hget(kind.tombstone_table(), natural_key.as_bytes())?;
        Ok(value.map(|v| String::from_utf8_lossy(&v).into_owned()))
    }
}
