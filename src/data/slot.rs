//! Durable slot backends: named text blobs that outlive the process

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use rusqlite::{params, Connection};
use thiserror::Error;

use super::database::Database;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Lock poisoned")]
    LockPoisoned,
    #[error("Storage is read-only")]
    ReadOnly,
}

/// Get/set access to named serialized blobs
pub trait SlotStorage {
    /// Read a slot; `Ok(None)` when the slot has never been written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a slot, replacing any previous contents
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process slot storage.
///
/// Clones share the same contents, so a test can keep a handle and inspect
/// what the store wrote or make later writes fail.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    slots: Arc<Mutex<HashMap<String, String>>>,
    read_only: Arc<AtomicBool>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage with one slot pre-filled
    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.put(key, value);
        storage
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Overwrite a slot directly (bypasses any store)
    pub fn put(&self, key: &str, value: &str) {
        self.slots().insert(key.to_string(), value.to_string());
    }

    /// Read a slot directly
    pub fn peek(&self, key: &str) -> Option<String> {
        self.slots().get(key).cloned()
    }

    /// Reject every `set` with [`StorageError::ReadOnly`] while enabled
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }
}

impl SlotStorage for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.peek(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StorageError::ReadOnly);
        }
        self.put(key, value);
        Ok(())
    }
}

/// Slot storage backed by the `app_state` key-value table
#[derive(Clone)]
pub struct SqliteSlot {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSlot {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    pub fn from_database(db: &Database) -> Self {
        Self::new(db.connection())
    }
}

impl SlotStorage for SqliteSlot {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut stmt = conn.prepare("SELECT value FROM app_state WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;

        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        conn.execute(
            "INSERT INTO app_state (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        tracing::trace!(key, bytes = value.len(), "Slot written");
        Ok(())
    }
}

impl std::fmt::Debug for SqliteSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteSlot").finish_non_exhaustive()
    }
}
