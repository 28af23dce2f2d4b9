//! Persistence gateway
//!
//! Synchronous string key/value storage behind the [`Storage`] trait. The
//! engine reads and writes JSON snapshots through it and never treats a
//! storage failure as fatal: missing or corrupt values fall back to defaults.

mod snapshot;

pub use snapshot::{
    LastCompletedRound, RoundSnapshot, StatsSnapshot, LAST_ROUND_KEY, STATE_KEY, STATS_KEY,
};

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Synchronous string key/value storage
pub trait Storage {
    /// Read the raw value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str);

    /// Delete the value stored under `key`
    fn remove(&mut self, key: &str);
}

/// Decode a JSON value from storage
///
/// Malformed JSON is treated the same as an absent key.
pub fn read_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            eprintln!("Ignoring corrupt value for '{key}': {e}");
            None
        }
    }
}

/// Encode a value as JSON and store it, best effort
pub fn write_json<T: Serialize>(storage: &mut dyn Storage, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => storage.set(key, &json),
        Err(e) => eprintln!("Failed to serialize value for '{key}': {e}"),
    }
}

/// In-memory storage for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// File-backed storage: one JSON object file holding all keys
///
/// The terminal equivalent of browser localStorage. Writes go through to
/// disk immediately; write failures are reported and otherwise ignored so a
/// read-only home directory never breaks a session.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the default store (`~/.wordget/storage.json`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined.
    pub fn open_default() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Ok(Self::open(home_dir.join(".wordget").join("storage.json")))
    }

    /// Open a store at a specific path, loading any existing contents
    ///
    /// A missing or unreadable file starts the store empty.
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();

        Self { path, entries }
    }

    fn flush(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Failed to create storage directory: {e}");
                return;
            }
        }

        match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    eprintln!("Failed to write storage file: {e}");
                }
            }
            Err(e) => eprintln!("Failed to serialize storage file: {e}"),
        }
    }
}

impl Storage for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        count: u32,
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);

        store.set("key", "value");
        assert_eq!(store.get("key").as_deref(), Some("value"));

        store.remove("key");
        assert_eq!(store.get("key"), None);
    }

    #[test]
    fn read_json_returns_value() {
        let mut store = MemoryStore::new();
        write_json(&mut store, "sample", &Sample { count: 7 });

        let loaded: Option<Sample> = read_json(&store, "sample");
        assert_eq!(loaded, Some(Sample { count: 7 }));
    }

    #[test]
    fn read_json_malformed_treated_as_absent() {
        let mut store = MemoryStore::new();
        store.set("sample", "{not json");

        let loaded: Option<Sample> = read_json(&store, "sample");
        assert_eq!(loaded, None);
    }

    #[test]
    fn read_json_missing_key() {
        let store = MemoryStore::new();
        let loaded: Option<Sample> = read_json(&store, "sample");
        assert_eq!(loaded, None);
    }

    #[test]
    fn file_store_persists_across_opens() {
        let dir = std::env::temp_dir().join("wordget-test-store");
        let path = dir.join(format!("storage-{}.json", std::process::id()));
        let _ = fs::remove_file(&path);

        {
            let mut store = FileStore::open(path.clone());
            store.set("key", "value");
        }

        let reopened = FileStore::open(path.clone());
        assert_eq!(reopened.get("key").as_deref(), Some("value"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn file_store_missing_file_starts_empty() {
        let store = FileStore::open(PathBuf::from("/nonexistent/dir/storage.json"));
        assert_eq!(store.get("key"), None);
    }
}
