//! SQLite-backed slot: records survive closing and reopening the database

use super::common::fixtures::org;
use orgdir::data::{SlotStorage, STORAGE_KEY};
use orgdir::{Database, OrganizationStore, SqliteSlot};
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> OrganizationStore {
    let db = Database::open(dir.path().join("orgdir.db")).expect("Failed to open database");
    OrganizationStore::open(SqliteSlot::from_database(&db)).expect("Failed to open store")
}

#[test]
fn test_first_open_seeds_database() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    assert_eq!(store.len(), 2);

    let reopened = open_store(&dir);
    assert_eq!(reopened.all(), store.all());
}

#[test]
fn test_mutations_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    store.add(org("new", "ООО \"Ромашка\"", "Петров П.П.")).unwrap();
    let seed_id = store.all()[1].id.clone();
    store.delete(&seed_id).unwrap();
    let expected = store.all();
    drop(store);

    let reopened = open_store(&dir);
    assert_eq!(reopened.all(), expected);
    assert_eq!(reopened.len(), 2);
}

#[test]
fn test_corrupt_row_resets_without_seed() {
    let dir = TempDir::new().unwrap();
    let db = Database::open(dir.path().join("orgdir.db")).unwrap();
    let slot = SqliteSlot::from_database(&db);
    slot.set(STORAGE_KEY, "{oops").unwrap();

    let store = OrganizationStore::open(slot).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_in_memory_database() {
    let db = Database::open_in_memory().unwrap();
    let mut store = OrganizationStore::open(SqliteSlot::from_database(&db)).unwrap();
    store.add(org("x", "А", "Б")).unwrap();

    let again = OrganizationStore::open(SqliteSlot::from_database(&db)).unwrap();
    assert_eq!(again.len(), 3);
}
