//! In-memory reference store.
//!
//! `MemStore` is the canonical `Store` implementation: a `BTreeMap` over raw
//! bytes. It backs the test suites and doubles as an embedded context for
//! callers that want the collections layer without an external engine.
//! Within one `MemStore` value, writes are immediately visible to subsequent
//! reads (read-your-writes).

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::store::{RawEntry, Store};

/// Ordered in-memory byte store backed by a `BTreeMap`.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &[u8], value: Vec<u8>) {
        self.entries.insert(key.to_vec(), value);
    }

    fn delete(&mut self, key: &[u8]) {
        self.entries.remove(key);
    }

    fn has(&self, key: &[u8]) -> bool {
        self.entries.contains_key(key)
    }

    fn iterate<'a>(
        &'a self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        ascending: bool,
    ) -> Box<dyn Iterator<Item = RawEntry> + 'a> {
        // BTreeMap::range panics on inverted bounds; an inverted logical
        // range is simply empty.
        if let (Some(s), Some(e)) = (start, end) {
            if s >= e {
                return Box::new(std::iter::empty());
            }
        }

        let lower = match start {
            Some(s) => Bound::Included(s.to_vec()),
            None => Bound::Unbounded,
        };
        let upper = match end {
            Some(e) => Bound::Excluded(e.to_vec()),
            None => Bound::Unbounded,
        };

        let range = self
            .entries
            .range((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()));

        if ascending {
            Box::new(range)
        } else {
            Box::new(range.rev())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> MemStore {
        let mut store = MemStore::new();
        store.set(b"a", b"1".to_vec());
        store.set(b"b", b"2".to_vec());
        store.set(b"c", b"3".to_vec());
        store
    }

    #[test]
    fn test_set_get() {
        let mut store = MemStore::new();
        store.set(b"key", b"value".to_vec());
        assert_eq!(store.get(b"key"), Some(b"value".to_vec()));
        assert_eq!(store.get(b"missing"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemStore::new();
        store.set(b"key", b"v1".to_vec());
        store.set(b"key", b"v2".to_vec());
        assert_eq!(store.get(b"key"), Some(b"v2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete() {
        let mut store = seeded();
        store.delete(b"b");
        assert!(!store.has(b"b"));
        assert_eq!(store.len(), 2);
        // deleting an absent key is a no-op
        store.delete(b"b");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_has() {
        let store = seeded();
        assert!(store.has(b"a"));
        assert!(!store.has(b"z"));
    }

    #[test]
    fn test_iterate_full_ascending() {
        let store = seeded();
        let keys: Vec<Vec<u8>> = store
            .iterate(None, None, true)
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn test_iterate_full_descending() {
        let store = seeded();
        let keys: Vec<Vec<u8>> = store
            .iterate(None, None, false)
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec![b"c".to_vec(), b"b".to_vec(), b"a".to_vec()]);
    }

    #[test]
    fn test_iterate_bounded_half_open() {
        let store = seeded();
        // [a, c) excludes c
        let keys: Vec<Vec<u8>> = store
            .iterate(Some(b"a".as_slice()), Some(b"c".as_slice()), true)
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn test_iterate_inverted_range_is_empty() {
        let store = seeded();
        assert_eq!(
            store.iterate(Some(b"c".as_slice()), Some(b"a".as_slice()), true).count(),
            0
        );
        assert_eq!(
            store.iterate(Some(b"a".as_slice()), Some(b"a".as_slice()), true).count(),
            0
        );
    }

    #[test]
    fn test_read_your_writes() {
        let mut store = MemStore::new();
        store.set(b"k", b"v".to_vec());
        assert_eq!(store.get(b"k"), Some(b"v".to_vec()));
        store.delete(b"k");
        assert_eq!(store.get(b"k"), None);
    }
}
