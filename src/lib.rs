pub mod config;
pub mod data;
pub mod ui;
pub mod util;

pub use config::Config;
pub use data::{
    Address, Database, MemorySlot, Organization, OrganizationStore, QueryPage, QueryParams,
    SlotStorage, SortDir, SortField, SqliteSlot, StorageError, StoreError,
};
pub use ui::App;
