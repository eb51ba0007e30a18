use potion_core::{Order, OrderedStore, Potion, SortKey};
use proptest::prelude::*;

fn potion_strategy() -> impl Strategy<Value = Potion> {
    ("[a-e]{1,2}", 0u32..100, 0u32..100, 0u32..100)
        .prop_map(|(name, strength, speed, health)| Potion::new(name, strength, speed, health))
}

fn sort_key_strategy() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_invariants_hold_after_each_insert(
        key in sort_key_strategy(),
        potions in prop::collection::vec(potion_strategy(), 0..200),
    ) {
        let mut store = OrderedStore::with_sort_key(key);
        for potion in potions {
            store.insert(potion);
            prop_assert!(store.validate().is_ok());
        }
    }

    #[test]
    fn prop_inorder_is_non_decreasing(
        key in sort_key_strategy(),
        potions in prop::collection::vec(potion_strategy(), 0..200),
    ) {
        let mut store = OrderedStore::with_sort_key(key);
        store.extend(potions.iter().cloned());

        let keys: Vec<i64> = store.iter().map(|p| key.key(p)).collect();
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(keys.len(), potions.len());
    }

    #[test]
    fn prop_descending_reverses_ascending(
        potions in prop::collection::vec(potion_strategy(), 0..100),
    ) {
        let mut store = OrderedStore::default();
        store.extend(potions);

        let mut ascending = store.ordered(Order::Ascending);
        ascending.reverse();
        prop_assert_eq!(ascending, store.ordered(Order::Descending));
    }

    #[test]
    fn prop_search_matches_presence(
        potions in prop::collection::vec(potion_strategy(), 0..100),
        query in "[a-f]{1,2}",
    ) {
        let mut store = OrderedStore::default();
        store.extend(potions.iter().cloned());

        let present = potions.iter().any(|p| p.name == query);
        match store.search(&query) {
            Some(found) => {
                prop_assert_eq!(&found.name, &query);
            }
            None => {
                prop_assert!(!present);
            }
        }
        prop_assert_eq!(store.search(&query).is_some(), present);
    }

    #[test]
    fn prop_remove_drops_exactly_one(
        potions in prop::collection::vec(potion_strategy(), 0..100),
        query in "[a-f]{1,2}",
    ) {
        let mut store = OrderedStore::with_sort_key(SortKey::Speed);
        store.extend(potions.iter().cloned());

        let before = store.len();
        let matches = potions.iter().filter(|p| p.name == query).count();

        let removed = store.remove(&query);
        prop_assert!(store.validate().is_ok());

        if matches == 0 {
            prop_assert!(removed.is_none());
            prop_assert_eq!(store.len(), before);
        } else {
            prop_assert_eq!(removed.map(|p| p.name), Some(query.clone()));
            prop_assert_eq!(store.len(), before - 1);
            prop_assert_eq!(store.search(&query).is_some(), matches > 1);
        }
    }
}
