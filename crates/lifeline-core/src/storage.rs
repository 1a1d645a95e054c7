//! Preference storage.
//!
//! A small string key-value store standing in for browser-local storage.
//! The page only ever writes one key (`theme`), but the store is keyed so
//! the persisted file stays readable if more preferences appear.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::LifelineResult;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// File name of the preference database inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.redb";

/// Key-value persistence for user preferences
pub trait PreferenceStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> LifelineResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> LifelineResult<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    fn get(&self, key: &str) -> LifelineResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> LifelineResult<()> {
        (**self).set(key, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> LifelineResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> LifelineResult<()> {
        (**self).set(key, value)
    }
}

/// Preference storage using redb for durable persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// Creates the parent directory and the preferences table if needed.
    pub fn new(path: impl AsRef<Path>) -> LifelineResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open the preference database inside a data directory
    pub fn open_in(data_dir: impl AsRef<Path>) -> LifelineResult<Self> {
        Self::new(data_dir.as_ref().join(PREFERENCES_FILE))
    }
}

impl PreferenceStore for Storage {
    fn get(&self, key: &str) -> LifelineResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> LifelineResult<()> {
        let db = self.db.write();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-process preference store.
///
/// Used when the database cannot be opened, and in tests. Values live only
/// as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> LifelineResult<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> LifelineResult<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
