//! # Record Cache
//!
//! Write-once-per-country store of normalized records. Entries are never
//! evicted and never expire; the cache lives exactly as long as the service
//! (or test) that owns it.
//!
//! The lock is `parking_lot`, not `tokio::sync`, because it is never held
//! across an `.await`. Loads for the same uncached country are not
//! deduplicated: two concurrent loads may both fetch, and whichever stores
//! first wins; the other load's records are discarded.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use unicat_core::{CountryCode, University};

/// Cloneable handle to a shared per-country record cache.
#[derive(Debug, Clone, Default)]
pub struct RecordCache {
    entries: Arc<RwLock<HashMap<CountryCode, Arc<[University]>>>>,
}

impl RecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached records for `country`, sharing the stored allocation.
    pub fn get(&self, country: CountryCode) -> Option<Arc<[University]>> {
        self.entries.read().get(&country).cloned()
    }

    /// Store `records` for `country` unless an entry already exists, and
    /// return whichever entry is cached afterwards.
    pub fn get_or_insert(&self, country: CountryCode, records: Arc<[University]>) -> Arc<[University]> {
        Arc::clone(self.entries.write().entry(country).or_insert(records))
    }

    pub fn contains(&self, country: CountryCode) -> bool {
        self.entries.read().contains_key(&country)
    }

    /// Number of countries currently cached.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry. Used at teardown; the service itself never evicts.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicat_core::UniversityEntry;

    fn records(names: &[&str]) -> Arc<[University]> {
        names
            .iter()
            .map(|n| {
                let entry = UniversityEntry {
                    university_name: n.to_string(),
                    ..Default::default()
                };
                University::from_entry(entry, CountryCode::Germany)
            })
            .collect()
    }

    #[test]
    fn get_returns_shared_allocation() {
        let cache = RecordCache::new();
        let stored = records(&["TU Munich"]);
        let cached = cache.get_or_insert(CountryCode::Germany, Arc::clone(&stored));
        assert!(Arc::ptr_eq(&cached, &stored));

        let a = cache.get(CountryCode::Germany).unwrap();
        let b = cache.get(CountryCode::Germany).unwrap();
        assert!(Arc::ptr_eq(&a, &stored));
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn clones_share_entries() {
        let cache = RecordCache::new();
        let handle = cache.clone();
        handle.get_or_insert(CountryCode::Germany, records(&["RWTH Aachen"]));
        assert!(cache.contains(CountryCode::Germany));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn first_insert_wins() {
        let cache = RecordCache::new();
        let first = records(&["LMU Munich"]);
        let second = records(&["LMU Munich"]);
        cache.get_or_insert(CountryCode::Germany, Arc::clone(&first));
        let kept = cache.get_or_insert(CountryCode::Germany, second);
        assert!(Arc::ptr_eq(&kept, &first));
    }

    #[test]
    fn missing_country_is_none() {
        let cache = RecordCache::new();
        assert!(cache.get(CountryCode::Uk).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_empties_cache() {
        let cache = RecordCache::new();
        cache.get_or_insert(CountryCode::Germany, records(&["TU Berlin"]));
        cache.clear();
        assert!(cache.is_empty());
    }
}
