//! Data layer for orgdir
//!
//! Record model, the query pipeline, the record store and the durable slot
//! backends it persists through (SQLite or in-memory).

mod database;
mod migrations;
mod models;
mod query;
mod slot;
mod store;

pub use database::{Database, DatabaseError};
pub use models::{generate_id, Address, Organization};
pub use query::{
    run_query, Collation, CollationError, QueryPage, QueryParams, SortDir, SortField,
    DEFAULT_PAGE_SIZE,
};
pub use slot::{MemorySlot, SlotStorage, SqliteSlot, StorageError};
pub use store::{seed_records, OrganizationStore, StoreError, STORAGE_KEY};
