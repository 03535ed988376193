//! Property tests for the filter → sort → paginate pipeline

use std::cmp::Ordering;

use orgdir::data::{run_query, Collation};
use orgdir::{Address, MemorySlot, Organization, OrganizationStore, QueryParams, SortDir, SortField};
use proptest::prelude::*;

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ]{0,12}",
        "[а-яА-ЯёЁ ]{0,12}",
        Just(String::new()),
        "\\PC{0,10}",
    ]
}

fn arb_org() -> impl Strategy<Value = Organization> {
    (arb_text(), arb_text(), arb_text(), arb_text()).prop_map(|(name, director, phone, city)| {
        Organization::new(name, director, phone, Address::new(city, "ул. Мира", "д. 1"))
    })
}

fn arb_sort() -> impl Strategy<Value = (Option<SortField>, SortDir)> {
    (
        prop_oneof![
            Just(None),
            Just(Some(SortField::Name)),
            Just(Some(SortField::Director))
        ],
        prop_oneof![Just(SortDir::Asc), Just(SortDir::Desc)],
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Persisting then reloading yields the same collection in the same order
    #[test]
    fn prop_round_trip(items in prop::collection::vec(arb_org(), 0..20)) {
        let slot = MemorySlot::with_slot(orgdir::data::STORAGE_KEY, "[]");
        let mut store = OrganizationStore::open(slot.clone()).unwrap();
        for org in items.iter().rev() {
            store.add(org.clone()).unwrap();
        }

        let reopened = OrganizationStore::open(slot).unwrap();
        prop_assert_eq!(reopened.all(), items);
    }

    /// Every match contains the needle and nothing matching is dropped
    #[test]
    fn prop_filter_is_exact(
        items in prop::collection::vec(arb_org(), 0..30),
        needle in "[a-zа-я]{0,3}",
    ) {
        let collation = Collation::russian().unwrap();
        let params = QueryParams::new().with_search(needle.clone()).with_page_size(1000);
        let page = run_query(&items, &params, &collation);

        let expected: Vec<_> = items
            .iter()
            .filter(|o| o.director.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        prop_assert_eq!(page.items, expected);
    }

    /// Pages tile the sorted result without gaps or overlap
    #[test]
    fn prop_pages_tile_result(
        items in prop::collection::vec(arb_org(), 0..30),
        page_size in 1usize..8,
        (field, dir) in arb_sort(),
    ) {
        let collation = Collation::russian().unwrap();
        let base = QueryParams::new().with_sort(field, dir);
        let all = run_query(&items, &base.clone().with_page_size(1000), &collation);

        let first = run_query(&items, &base.clone().with_page_size(page_size), &collation);
        prop_assert_eq!(first.total_pages, items.len().div_ceil(page_size).max(1));

        let mut stitched = Vec::new();
        for page in 1..=first.total_pages {
            let chunk = run_query(
                &items,
                &base.clone().with_page_size(page_size).with_page(page),
                &collation,
            );
            prop_assert!(chunk.items.len() <= page_size);
            stitched.extend(chunk.items);
        }
        prop_assert_eq!(stitched, all.items);

        let beyond = run_query(
            &items,
            &base.with_page_size(page_size).with_page(first.total_pages + 1),
            &collation,
        );
        prop_assert!(beyond.items.is_empty());
    }

    /// Sorted output is monotone under the collation in the requested direction
    #[test]
    fn prop_sort_is_monotone(
        items in prop::collection::vec(arb_org(), 0..30),
        (field, dir) in arb_sort(),
    ) {
        let collation = Collation::russian().unwrap();
        let params = QueryParams::new().with_sort(field, dir).with_page_size(1000);
        let page = run_query(&items, &params, &collation);

        match field {
            None => prop_assert_eq!(page.items, items),
            Some(field) => {
                let forbidden = match dir {
                    SortDir::Asc => Ordering::Greater,
                    SortDir::Desc => Ordering::Less,
                };
                for pair in page.items.windows(2) {
                    prop_assert_ne!(
                        collation.compare(pair[0].field(field), pair[1].field(field)),
                        forbidden
                    );
                }
            }
        }
    }
}
