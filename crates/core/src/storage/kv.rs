//! SQLite-backed key-value rows

use chrono::Utc;
use rusqlite::{params, Connection};

use super::parse::OptionalExt;
use crate::error::Result;

/// Key-value row store
pub struct KvStore<'a> {
    conn: &'a Connection,
}

impl<'a> KvStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert or replace a value
    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Fetch a value
    pub fn fetch(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Delete a value
    pub fn delete(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    #[test]
    fn test_put_fetch() {
        let db = Database::open_in_memory().unwrap();
        let store = KvStore::new(&db.conn);

        store.put("totalCount", "3").unwrap();
        assert_eq!(store.fetch("totalCount").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_put_replaces() {
        let db = Database::open_in_memory().unwrap();
        let store = KvStore::new(&db.conn);

        store.put("waterCount", "1").unwrap();
        store.put("waterCount", "2").unwrap();
        assert_eq!(store.fetch("waterCount").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_missing_key() {
        let db = Database::open_in_memory().unwrap();
        let store = KvStore::new(&db.conn);

        assert!(store.fetch("attendees").unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let db = Database::open_in_memory().unwrap();
        let store = KvStore::new(&db.conn);

        store.put("a", "1").unwrap();
        store.put("b", "2").unwrap();
        store.delete("a").unwrap();
        assert!(store.fetch("a").unwrap().is_none());
        assert_eq!(store.fetch("b").unwrap().as_deref(), Some("2"));
    }
}
