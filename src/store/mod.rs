mod index;
mod memory;
mod records;
mod schema;
mod sqlite;

pub use index::{Kind, NameIndex};
pub use memory::MemoryKv;
pub use records::RecordStore;
pub use sqlite::SqliteKv;

use crate::error::Result;

/// KvStore defines the key-value interface every layer above is written
/// against: flat byte-keyed records plus named hash tables for the secondary
/// name indexes. All operations are synchronous round trips.
pub trait KvStore: Send + Sync {
    fn initialize(&self) -> Result<()> {
        Ok(())
    }

    // Flat records
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;
    fn set(&self, key: &[u8], value: &[u8]) -> Result<()>;
    fn delete(&self, key: &[u8]) -> Result<bool>;

    // Named hash tables
    fn hget(&self, table: &str, field: &[u8]) -> Result<Option<Vec<u8>>>;
    fn hset(&self, table: &str, field: &[u8], value: &[u8]) -> Result<()>;
    fn hdel(&self, table: &str, field: &[u8]) -> Result<bool>;
}
