//! # Storage
//!
//! Key/value storage abstraction plus the snapshot store that keeps the
//! simulator form under a single key. Browser-backed implementations live in
//! the frontend; [`MemoryStore`] serves tests and pages without storage.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::SimulationSnapshot;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is not available: {0}")]
    Unavailable(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("stored snapshot is malformed: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Minimal string key/value store, shaped after `window.localStorage`
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites any previous value under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Volatile store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Reads and writes the [`SimulationSnapshot`] as JSON under one fixed key
#[derive(Debug)]
pub struct SnapshotStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn try_save(&self, snapshot: &SimulationSnapshot) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(snapshot).map_err(PersistenceError::Serialize)?;
        self.backend.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, "simulation snapshot saved");
        Ok(())
    }

    /// `Ok(None)` when nothing has been saved yet
    pub fn try_load(&self) -> Result<Option<SimulationSnapshot>, PersistenceError> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(None);
        };

        let snapshot = serde_json::from_str(&raw).map_err(PersistenceError::Parse)?;
        Ok(Some(snapshot))
    }

    pub fn try_clear(&self) -> Result<(), PersistenceError> {
        self.backend.remove(&self.key)?;
        tracing::debug!(key = %self.key, "simulation snapshot cleared");
        Ok(())
    }
}
