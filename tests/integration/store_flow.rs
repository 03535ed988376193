//! End-to-end scenarios for the record store over an in-memory slot

use super::common::fixtures::{empty_store, numbered_store, org, seeded_store};
use orgdir::data::{Collation, STORAGE_KEY};
use orgdir::{Address, MemorySlot, Organization, OrganizationStore, QueryParams, SortDir, SortField};

#[test]
fn test_seed_then_add_then_search() {
    let (_slot, mut store) = seeded_store();
    assert_eq!(store.len(), 2);

    store
        .add(Organization::new(
            "ООО \"Ромашка\"",
            "Петров П.П.",
            "+7 000 111 22 33",
            Address::new("г. Тула", "ул. Мира", "д. 3"),
        ))
        .unwrap();

    let page = store.query(&QueryParams::new().with_search("петров"));
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].director, "Петров П.П.");
    assert_eq!(page.total, 1);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn test_update_changes_only_target() {
    let (_slot, mut store) = seeded_store();
    let before = store.all();
    let target = before[1].clone();

    let mut changed = target.clone();
    changed.phone = "+7 000 99 99 99".to_string();
    store.update(changed).unwrap();

    let after = store.all();
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(&after) {
        if old.id == target.id {
            assert_eq!(new.phone, "+7 000 99 99 99");
            assert_eq!(new.name, old.name);
            assert_eq!(new.address, old.address);
        } else {
            assert_eq!(new, old);
        }
    }
}

#[test]
fn test_corrupt_slot_yields_empty_collection() {
    let slot = MemorySlot::with_slot(STORAGE_KEY, "[{\"id\": 1, broken");
    let store = OrganizationStore::open(slot).unwrap();
    assert!(store.all().is_empty());
    assert_eq!(store.query(&QueryParams::new()).total_pages, 1);
}

#[test]
fn test_corrupt_slot_is_overwritten_by_next_mutation() {
    let slot = MemorySlot::with_slot(STORAGE_KEY, "not json");
    let mut store = OrganizationStore::open(slot.clone()).unwrap();
    store.add(org("1", "А", "Б")).unwrap();

    let reopened = OrganizationStore::open(slot).unwrap();
    assert_eq!(reopened.all(), vec![org("1", "А", "Б")]);
}

#[test]
fn test_round_trip_preserves_order() {
    let (slot, store) = numbered_store(7);
    let reopened = OrganizationStore::open(slot).unwrap();
    assert_eq!(reopened.all(), store.all());
}

#[test]
fn test_delete_absent_id_is_idempotent() {
    let (_slot, mut store) = seeded_store();
    let before = store.all();
    store.delete("no-such-id").unwrap();
    assert_eq!(store.all(), before);
}

#[test]
fn test_update_unknown_id_is_silent() {
    let (_slot, mut store) = seeded_store();
    let before = store.all();
    store.update(org("ghost", "X", "Y")).unwrap();
    assert_eq!(store.all(), before);
}

#[test]
fn test_filter_matches_director_only() {
    let (_slot, mut store) = empty_store();
    store.add(org("1", "Ivanov Holdings", "Smith J.")).unwrap();
    store.add(org("2", "Acme", "IVANOVA A.")).unwrap();
    store.add(org("3", "Beta", "Petrov P.")).unwrap();

    let page = store.query(&QueryParams::new().with_search("ivan"));
    let ids: Vec<_> = page.items.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["2"]);
}

#[test]
fn test_sort_by_name_both_directions() {
    let (_slot, mut store) = empty_store();
    for (id, name) in [("1", "Яблоко"), ("2", "абрикос"), ("3", "Борис"), ("4", "ёлка")] {
        store.add(org(id, name, "Д")).unwrap();
    }
    let collation = Collation::russian().unwrap();

    let desc = store.query(
        &QueryParams::new()
            .with_sort(Some(SortField::Name), SortDir::Desc)
            .with_page_size(10),
    );
    for pair in desc.items.windows(2) {
        assert_ne!(
            collation.compare(&pair[0].name, &pair[1].name),
            std::cmp::Ordering::Less
        );
    }

    let asc = store.query(
        &QueryParams::new()
            .with_sort(Some(SortField::Name), SortDir::Asc)
            .with_page_size(10),
    );
    let names: Vec<_> = asc.items.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["абрикос", "Борис", "ёлка", "Яблоко"]);
}

#[test]
fn test_pagination_of_twelve() {
    let (_slot, store) = numbered_store(12);
    let params = QueryParams::new().with_page_size(5);

    let first = store.query(&params.clone().with_page(1));
    assert_eq!(first.items.len(), 5);
    assert_eq!(first.total_pages, 3);

    let third = store.query(&params.clone().with_page(3));
    assert_eq!(third.items.len(), 2);

    let beyond = store.query(&params.with_page(5));
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total_pages, 3);
    assert_eq!(beyond.total, 12);
}

#[test]
fn test_default_page_size_is_five() {
    let (_slot, store) = numbered_store(6);
    let page = store.query(&QueryParams::new());
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.total_pages, 2);
}
