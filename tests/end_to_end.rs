//! End-to-end range engine tests.
//!
//! These tests exercise the full stack — schema wiring, encoders, range
//! resolution, iteration — against `MemStore`, the reference store.

use chrono::{DateTime, Utc};
use keyspace::{
    Map, MemStore, Range, Schema, StringKey, StringValue, TimeKey, U64Key, U64Value,
};

fn balances(schema: &mut Schema) -> Map<StringKey, U64Value> {
    Map::new(schema, 1, "owner", StringKey, "balance", U64Value).unwrap()
}

fn seeded() -> (Map<StringKey, U64Value>, MemStore) {
    let mut schema = Schema::new();
    let map = balances(&mut schema);
    let mut store = MemStore::new();
    for (owner, balance) in [("alice", 10u64), ("bob", 20), ("carol", 30)] {
        map.insert(&mut store, &owner.to_string(), &balance).unwrap();
    }
    (map, store)
}

#[test]
fn test_bounded_ascending_scan() {
    let (map, store) = seeded();
    let range = Range::new()
        .start_inclusive("alice".to_string())
        .end_exclusive("carol".to_string());
    let entries = map.iterate(&store, range).unwrap().entries().unwrap();
    assert_eq!(
        entries,
        vec![("alice".to_string(), 10), ("bob".to_string(), 20)]
    );
}

#[test]
fn test_bounded_descending_scan() {
    let (map, store) = seeded();
    let range = Range::new()
        .start_inclusive("alice".to_string())
        .end_exclusive("carol".to_string())
        .descending();
    let entries = map.iterate(&store, range).unwrap().entries().unwrap();
    assert_eq!(
        entries,
        vec![("bob".to_string(), 20), ("alice".to_string(), 10)]
    );
}

#[test]
fn test_empty_range_scans_everything() {
    let (map, store) = seeded();
    let keys = map.iterate(&store, Range::new()).unwrap().keys().unwrap();
    assert_eq!(keys, vec!["alice", "bob", "carol"]);
}

#[test]
fn test_values_materialization() {
    let (map, store) = seeded();
    let values = map
        .iterate(&store, Range::new().descending())
        .unwrap()
        .values()
        .unwrap();
    assert_eq!(values, vec![30, 20, 10]);
}

#[test]
fn test_exclusive_start() {
    let (map, store) = seeded();
    let range = Range::new().start_exclusive("alice".to_string());
    let keys = map.iterate(&store, range).unwrap().keys().unwrap();
    assert_eq!(keys, vec!["bob", "carol"]);
}

#[test]
fn test_inclusive_end() {
    let (map, store) = seeded();
    let range = Range::new().end_inclusive("bob".to_string());
    let keys = map.iterate(&store, range).unwrap().keys().unwrap();
    assert_eq!(keys, vec!["alice", "bob"]);
}

#[test]
fn test_string_bound_is_not_a_key_prefix_filter() {
    // "bo" is a bound value, not a glob: the scan starts at the encoding of
    // "bo" which sorts before "bob"
    let (map, store) = seeded();
    let range = Range::new().start_inclusive("bo".to_string());
    let keys = map.iterate(&store, range).unwrap().keys().unwrap();
    assert_eq!(keys, vec!["bob", "carol"]);
}

#[test]
fn test_u64_keys_scan_numerically() {
    let mut schema = Schema::new();
    let map: Map<U64Key, StringValue> =
        Map::new(&mut schema, 4, "height", U64Key, "block_hash", StringValue).unwrap();
    let mut store = MemStore::new();
    // insertion order deliberately scrambled
    for height in [256u64, 1, 10, 2, 255] {
        map.insert(&mut store, &height, &format!("hash-{height}"))
            .unwrap();
    }

    let keys = map.iterate(&store, Range::new()).unwrap().keys().unwrap();
    assert_eq!(keys, vec![1, 2, 10, 255, 256]);

    let range = Range::new().start_inclusive(2u64).end_inclusive(255u64);
    let keys = map.iterate(&store, range).unwrap().keys().unwrap();
    assert_eq!(keys, vec![2, 10, 255]);
}

#[test]
fn test_time_keys_scan_chronologically() {
    let mut schema = Schema::new();
    let map: Map<TimeKey, U64Value> =
        Map::new(&mut schema, 5, "unbonding_time", TimeKey, "entry", U64Value).unwrap();
    let mut store = MemStore::new();

    let times: Vec<DateTime<Utc>> = [
        "2020-01-01T00:00:00Z",
        "2021-06-15T12:30:00Z",
        "2021-06-15T12:30:00.000000001Z",
        "2030-12-31T23:59:59Z",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect();

    for (i, t) in times.iter().enumerate().rev() {
        map.insert(&mut store, t, &(i as u64)).unwrap();
    }

    let values = map.iterate(&store, Range::new()).unwrap().values().unwrap();
    assert_eq!(values, vec![0, 1, 2, 3]);

    let range = Range::new()
        .start_exclusive(times[0])
        .end_inclusive(times[2]);
    let values = map.iterate(&store, range).unwrap().values().unwrap();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn test_highest_namespace_scans_unbounded() {
    // namespace 0xFF has no prefix successor; the scan end is unbounded
    let mut schema = Schema::new();
    let map: Map<U64Key, U64Value> =
        Map::new(&mut schema, 0xFF, "id", U64Key, "edge_case", U64Value).unwrap();
    let mut store = MemStore::new();
    map.insert(&mut store, &u64::MAX, &1).unwrap();
    map.insert(&mut store, &0, &2).unwrap();

    let keys = map.iterate(&store, Range::new()).unwrap().keys().unwrap();
    assert_eq!(keys, vec![0, u64::MAX]);
}

#[test]
fn test_iteration_is_single_pass() {
    let (map, store) = seeded();
    let mut iter = map.iterate(&store, Range::new()).unwrap();
    let first = iter.next().unwrap().unwrap();
    assert_eq!(first.0, "alice");
    // draining the same iterator continues where it left off
    let rest = iter.entries().unwrap();
    assert_eq!(rest.len(), 2);
    // a fresh iterate starts over
    let again = map.iterate(&store, Range::new()).unwrap().entries().unwrap();
    assert_eq!(again.len(), 3);
}

#[test]
fn test_overwrite_then_scan_sees_latest() {
    let (map, mut store) = seeded();
    map.insert(&mut store, &"bob".to_string(), &99).unwrap();
    let entries = map.iterate(&store, Range::new()).unwrap().entries().unwrap();
    assert_eq!(
        entries,
        vec![
            ("alice".to_string(), 10),
            ("bob".to_string(), 99),
            ("carol".to_string(), 30),
        ]
    );
}
