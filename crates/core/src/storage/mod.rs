//! Storage layer for check-in state

mod adapter;
mod kv;
mod memory;
mod migrations;
mod parse;
mod traits;

use rusqlite::Connection;
use std::path::Path;
use tracing::instrument;

use crate::error::Result;

pub use adapter::{keys, DurableStore};
pub use kv::KvStore;
pub use memory::MemoryStore;
pub use parse::{parse_count, parse_non_negative};
pub use traits::KeyValueStore;

#[cfg(test)]
pub(crate) use adapter::tests::BrokenStore;

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initialize database schema via migrations
    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)?;
        Ok(())
    }

    /// Get current schema version
    pub fn schema_version(&self) -> u32 {
        migrations::get_current_version(&self.conn).unwrap_or(0)
    }

    /// Get key-value row store
    pub fn kv(&self) -> KvStore<'_> {
        KvStore::new(&self.conn)
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.conn.path())
            .finish()
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.kv().fetch(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.kv().put(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.kv().delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_version() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.schema_version(), 1);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checkin.db");

        {
            let db = Database::open(&path).unwrap();
            db.set(keys::TOTAL, "7").unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(db.get(keys::TOTAL).unwrap().as_deref(), Some("7"));
        assert_eq!(db.schema_version(), 1);
    }
}
