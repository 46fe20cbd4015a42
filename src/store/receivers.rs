//! Receiver directory access.

use super::MockStore;
use crate::models::Receiver;

/// Every contact in the directory.
pub fn all(store: &MockStore) -> &[Receiver] {
    &store.receivers
}

pub fn get<'a>(store: &'a MockStore, id: &str) -> Option<&'a Receiver> {
    store.receivers.iter().find(|r| r.id == id)
}

/// Case-insensitive name match, or raw substring match on the phone number.
pub fn search<'a>(store: &'a MockStore, query: &str) -> Vec<&'a Receiver> {
    let needle = query.to_lowercase();
    store
        .receivers
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle) || r.phone.contains(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_directory() {
        let store = MockStore::for_tests();
        assert_eq!(all(&store).len(), 4);
        assert_eq!(get(&store, "2").map(|r| r.name.as_str()), Some("Jane Smith"));
        assert!(get(&store, "99").is_none());
    }

    #[test]
    fn test_search_by_name_is_case_insensitive() {
        let store = MockStore::for_tests();
        let hits = search(&store, "jane");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Jane Smith");
    }

    #[test]
    fn test_search_by_phone_fragment() {
        let store = MockStore::for_tests();
        let hits = search(&store, "+243");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_search_empty_query_returns_everyone() {
        let store = MockStore::for_tests();
        assert_eq!(search(&store, "").len(), 4);
    }
}
