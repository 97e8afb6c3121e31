//! Best-effort durable store adapter
//!
//! Wraps a [`KeyValueStore`] with typed reads and writes that never fail the
//! caller. Unreadable or unparsable values are reported as absent; failed
//! writes are logged and dropped.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::parse::parse_count;
use super::KeyValueStore;

/// Persisted key names
pub mod keys {
    use crate::models::TeamId;

    pub const TOTAL: &str = "totalCount";
    pub const WATER: &str = "waterCount";
    pub const ZERO: &str = "zeroCount";
    pub const POWER: &str = "powerCount";
    pub const ATTENDEES: &str = "attendees";

    /// Counter key for a team
    pub fn team(team: TeamId) -> &'static str {
        match team {
            TeamId::Water => WATER,
            TeamId::Zero => ZERO,
            TeamId::Power => POWER,
        }
    }
}

pub struct DurableStore<S> {
    inner: S,
}

impl<S: KeyValueStore> DurableStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.inner.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Store read failed, treating as absent");
                None
            }
        }
    }

    fn write_raw(&self, key: &str, value: &str) -> bool {
        match self.inner.set(key, value) {
            Ok(()) => {
                debug!(key, "Persisted value");
                true
            }
            Err(e) => {
                warn!(key, error = %e, "Store write failed, continuing without persistence");
                false
            }
        }
    }

    /// Read a decimal integer. Absent or non-numeric values yield `None`.
    pub fn read_int(&self, key: &str) -> Option<i64> {
        let raw = self.read_raw(key)?;
        let parsed = parse_count(&raw);
        if parsed.is_none() {
            debug!(key, raw = %raw, "Ignoring non-numeric stored value");
        }
        parsed
    }

    /// Write a decimal integer. Returns whether the write landed.
    pub fn write_int(&self, key: &str, value: i64) -> bool {
        self.write_raw(key, &value.to_string())
    }

    /// Read a JSON value. Absent or malformed values yield `None`.
    pub fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(key, error = %e, "Ignoring malformed stored JSON");
                None
            }
        }
    }

    /// Write a JSON value. Returns whether the write landed.
    pub fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(json) => self.write_raw(key, &json),
            Err(e) => {
                warn!(key, error = %e, "Could not serialize value for persistence");
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::storage::MemoryStore;

    /// A store whose medium rejects every operation
    pub(crate) struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Io(std::io::Error::other("medium unavailable")))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Io(std::io::Error::other("quota exceeded")))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Err(Error::Io(std::io::Error::other("medium unavailable")))
        }
    }

    #[test]
    fn test_int_round_trip() {
        let store = DurableStore::new(MemoryStore::new());
        assert!(store.write_int(keys::TOTAL, 12));
        assert_eq!(store.read_int(keys::TOTAL), Some(12));
        assert_eq!(store.inner().raw(keys::TOTAL).as_deref(), Some("12"));
    }

    #[test]
    fn test_non_numeric_is_absent() {
        let store = DurableStore::new(MemoryStore::with_entries([(keys::TOTAL, "lots")]));
        assert_eq!(store.read_int(keys::TOTAL), None);
        assert_eq!(store.read_int(keys::WATER), None);
    }

    #[test]
    fn test_malformed_json_is_absent() {
        let store = DurableStore::new(MemoryStore::with_entries([(keys::ATTENDEES, "[{oops")]));
        let parsed: Option<Vec<String>> = store.read_json(keys::ATTENDEES);
        assert!(parsed.is_none());
    }

    #[test]
    fn test_broken_medium_degrades() {
        let store = DurableStore::new(BrokenStore);
        assert_eq!(store.read_int(keys::TOTAL), None);
        assert!(!store.write_int(keys::TOTAL, 1));
        assert!(!store.write_json(keys::ATTENDEES, &Vec::<String>::new()));
        let parsed: Option<Vec<String>> = store.read_json(keys::ATTENDEES);
        assert!(parsed.is_none());
    }

    #[test]
    fn test_team_keys() {
        use crate::models::TeamId;
        assert_eq!(keys::team(TeamId::Water), "waterCount");
        assert_eq!(keys::team(TeamId::Zero), "zeroCount");
        assert_eq!(keys::team(TeamId::Power), "powerCount");
    }
}
