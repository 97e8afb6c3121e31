//! Storage traits
//!
//! The engine only needs a synchronous string key-value medium. Backends
//! (SQLite, in-memory, anything else) implement [`KeyValueStore`].

use crate::error::Result;

/// Synchronous string key-value storage
pub trait KeyValueStore {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` if present
    fn remove(&self, key: &str) -> Result<()>;
}

// Lending a store keeps it inspectable by the caller
impl<S> KeyValueStore for &S
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
