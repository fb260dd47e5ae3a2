use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension, params};

use super::KvStore;
use super::schema::SCHEMA;
use crate::error::{Error, Result};

pub struct SqliteKv {
    conn: Mutex<Connection>,
}

impl SqliteKv {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KvStore for SqliteKv {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        self.conn()
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Error::from)
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.conn().execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT (key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(rows > 0)
    }

    fn hget(&self, table: &str, field: &[u8]) -> Result<Option<Vec<u8>>> {
        self.conn()
            .query_row(
                "SELECT value FROM kv_hash WHERE tbl = ?1 AND field = ?2",
                params![table, field],
                |row| row.get(0),
            )
            .optional()
            .map_err(Error::from)
    }

    fn hset(&self, table: &str, field: &[u8], value: &[u8]) -> Result<()> {
        self.conn().execute(
            "INSERT INTO kv_hash (tbl, field, value) VALUES (?1, ?2, ?3)
             ON CONFLICT (tbl, field) DO UPDATE SET value = excluded.value",
            params![table, field, value],
        )?;
        Ok(())
    }

    fn hdel(&self, table: &str, field: &[u8]) -> Result<bool> {
        let rows = self.conn().execute(
            "DELETE FROM kv_hash WHERE tbl = ?1 AND field = ?2",
            params![table, field],
        )?;
        Ok(rows > 0)
    }
}
