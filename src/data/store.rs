//! Organization record store: in-memory list mirrored to a durable slot

use thiserror::Error;

use super::models::{Address, Organization};
use super::query::{run_query, Collation, CollationError, QueryPage, QueryParams};
use super::slot::{SlotStorage, StorageError};

/// Slot name holding the serialized collection
pub const STORAGE_KEY: &str = "org_directory_v1";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Collation(#[from] CollationError),
}

/// Sole owner of the organization collection.
///
/// Records are kept newest-first. Every mutation writes the whole collection
/// back to the slot before returning, so memory and storage never diverge.
pub struct OrganizationStore {
    items: Vec<Organization>,
    storage: Box<dyn SlotStorage>,
    key: String,
    collation: Collation,
}

impl OrganizationStore {
    /// Open the store on the default slot, seeding it if the slot is absent
    pub fn open(storage: impl SlotStorage + 'static) -> Result<Self, StoreError> {
        Self::open_with_key(storage, STORAGE_KEY)
    }

    /// Open the store on a specific slot
    pub fn open_with_key(
        storage: impl SlotStorage + 'static,
        key: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let mut store = Self {
            items: Vec::new(),
            storage: Box::new(storage),
            key: key.into(),
            collation: Collation::russian()?,
        };
        store.load()?;
        Ok(store)
    }

    fn load(&mut self) -> Result<(), StoreError> {
        match self.storage.get(&self.key)? {
            // An empty slot counts as never written
            Some(raw) if !raw.is_empty() => {
                match serde_json::from_str::<Vec<Organization>>(&raw) {
                    Ok(items) => {
                        tracing::debug!(key = %self.key, count = items.len(), "Loaded records");
                        self.items = items;
                    }
                    Err(e) => {
                        tracing::warn!(
                            key = %self.key,
                            error = %e,
                            "Stored records are unreadable, starting empty"
                        );
                        self.items = Vec::new();
                    }
                }
            }
            _ => {
                tracing::info!(key = %self.key, "No stored records, seeding examples");
                self.commit(seed_records())?;
            }
        }
        Ok(())
    }

    /// Persist `next` and adopt it only once the write succeeded
    fn commit(&mut self, next: Vec<Organization>) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&next)?;
        if let Err(e) = self.storage.set(&self.key, &raw) {
            tracing::warn!(key = %self.key, error = %e, "Write failed, keeping previous records");
            return Err(e.into());
        }
        self.items = next;
        Ok(())
    }

    /// Copy of the full collection in store order
    pub fn all(&self) -> Vec<Organization> {
        self.items.clone()
    }

    /// Copy of a single record
    pub fn get(&self, id: &str) -> Option<Organization> {
        self.items.iter().find(|org| org.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert a record at the front. No validation is performed.
    pub fn add(&mut self, org: Organization) -> Result<(), StoreError> {
        tracing::debug!(id = %org.id, "Adding record");
        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.push(org);
        next.extend(self.items.iter().cloned());
        self.commit(next)
    }

    /// Replace the record sharing `org.id`; silently ignored for unknown ids
    pub fn update(&mut self, org: Organization) -> Result<(), StoreError> {
        let Some(idx) = self.items.iter().position(|x| x.id == org.id) else {
            tracing::debug!(id = %org.id, "Update for unknown id ignored");
            return Ok(());
        };
        let mut next = self.items.clone();
        next[idx] = org;
        self.commit(next)
    }

    /// Remove the record with `id`; silently ignored for unknown ids
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        if !self.items.iter().any(|x| x.id == id) {
            tracing::debug!(id, "Delete for unknown id ignored");
            return Ok(());
        }
        tracing::debug!(id, "Deleting record");
        let next = self.items.iter().filter(|x| x.id != id).cloned().collect();
        self.commit(next)
    }

    /// Filtered, sorted and paginated view of the collection
    pub fn query(&self, params: &QueryParams) -> QueryPage {
        run_query(&self.items, params, &self.collation)
    }
}

impl std::fmt::Debug for OrganizationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrganizationStore")
            .field("key", &self.key)
            .field("len", &self.items.len())
            .finish()
    }
}

/// Example records written on first use
pub fn seed_records() -> Vec<Organization> {
    vec![
        Organization::new(
            "ООО \"Вектор\"",
            "Иванов И.И.",
            "+7 000 123 45 67",
            Address::new("г. Москва", "ул. Ленина", "д. 1"),
        ),
        Organization::new(
            "ИП Сидоров",
            "Сидоров С.С.",
            "+7 000 56 78 99",
            Address::new("г. Санкт-Петербург", "пр. Невский", "д. 2"),
        ),
    ]
}
