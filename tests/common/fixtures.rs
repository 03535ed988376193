//! Record and store fixtures

use orgdir::data::STORAGE_KEY;
use orgdir::{Address, MemorySlot, Organization, OrganizationStore};

/// A record with a predictable id and a filler address
pub fn org(id: &str, name: &str, director: &str) -> Organization {
    Organization::with_id(
        id,
        name,
        director,
        "+7 000 000 00 00",
        Address::new("г. Казань", "ул. Баумана", "д. 5"),
    )
}

/// Store opened on an absent slot, so it holds the two seed records
pub fn seeded_store() -> (MemorySlot, OrganizationStore) {
    let slot = MemorySlot::new();
    let store = OrganizationStore::open(slot.clone()).expect("open seeded store");
    (slot, store)
}

/// Store opened on an empty collection
pub fn empty_store() -> (MemorySlot, OrganizationStore) {
    let slot = MemorySlot::with_slot(STORAGE_KEY, "[]");
    let store = OrganizationStore::open(slot.clone()).expect("open empty store");
    (slot, store)
}

/// Store holding `count` records with directors "Директор 00", "Директор 01", ...
/// in that store order
pub fn numbered_store(count: usize) -> (MemorySlot, OrganizationStore) {
    let (slot, mut store) = empty_store();
    for i in (0..count).rev() {
        store
            .add(org(
                &format!("id-{i:02}"),
                &format!("Организация {i:02}"),
                &format!("Директор {i:02}"),
            ))
            .expect("add record");
    }
    (slot, store)
}
