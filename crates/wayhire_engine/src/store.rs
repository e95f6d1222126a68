use std::collections::HashMap;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;
use wayhire_core::{JobId, JobPosting};
use wayhire_logging::{wayhire_debug, wayhire_error, wayhire_warn};

use crate::{write_atomic, PersistError};

pub const SAVED_JOBS_KEY: &str = "wayhire_saved_jobs";
pub const APPLIED_JOBS_KEY: &str = "appliedJobs";

/// String blobs under fixed keys.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn write(&self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// One `{key}.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn filename(key: &str) -> String {
        format!("{key}.json")
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(self.dir.join(Self::filename(key))) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistError> {
        write_atomic(&self.dir, &Self::filename(key), value).map(|_| ())
    }
}

/// Process-local store for `--ephemeral` runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A JSON array stored whole under one key.
///
/// Loading and saving are best-effort: failures are logged and never reach the
/// caller, whose in-memory copy stays authoritative for the session.
pub struct JsonCollection<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    _items: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _items: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Missing key or unreadable data both yield an empty collection.
    pub fn load(&self) -> Vec<T> {
        let raw = match self.store.read(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                wayhire_debug!("No persisted record under {}", self.key);
                return Vec::new();
            }
            Err(err) => {
                wayhire_warn!("Failed to read persisted {}: {}", self.key, err);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => {
                wayhire_debug!("Loaded {} items from {}", items.len(), self.key);
                items
            }
            Err(err) => {
                wayhire_warn!("Failed to parse persisted {}: {}", self.key, err);
                Vec::new()
            }
        }
    }

    /// Rewrites the whole record. Returns whether the write landed.
    pub fn save(&self, items: &[T]) -> bool {
        let content = match serde_json::to_string(items) {
            Ok(text) => text,
            Err(err) => {
                wayhire_error!("Failed to serialize {}: {}", self.key, err);
                return false;
            }
        };
        match self.store.write(self.key, &content) {
            Ok(()) => true,
            Err(err) => {
                wayhire_error!("Failed to write {}: {}", self.key, err);
                false
            }
        }
    }
}

pub fn saved_jobs(store: Arc<dyn KeyValueStore>) -> JsonCollection<JobPosting> {
    JsonCollection::new(store, SAVED_JOBS_KEY)
}

pub fn applied_jobs(store: Arc<dyn KeyValueStore>) -> JsonCollection<JobId> {
    JsonCollection::new(store, APPLIED_JOBS_KEY)
}
