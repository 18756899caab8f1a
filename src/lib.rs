//! keyspace - Typed, namespaced collections over an ordered byte-keyed store
//!
//! keyspace lets a module declare strongly-typed collections — maps, single
//! items, composite-keyed maps, auto-incrementing counters — backed by any
//! ordered byte store, without hand-writing byte layouts or prefix scans.
//!
//! # Quick Start
//!
//! ```
//! use keyspace::{Map, MemStore, Range, Schema, StringKey, U64Value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut schema = Schema::new();
//! let balances = Map::new(&mut schema, 1, "owner", StringKey, "balance", U64Value)?;
//!
//! let mut store = MemStore::new();
//! balances.insert(&mut store, &"alice".to_string(), &10)?;
//! assert_eq!(balances.get(&store, &"alice".to_string())?, 10);
//!
//! let entries = balances.iterate(&store, Range::new())?.entries()?;
//! assert_eq!(entries, vec![("alice".to_string(), 10)]);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The workspace splits into two layers. `keyspace-core` holds the error
//! types, the minimal [`Store`] trait the indexing layer consumes, the
//! [`MemStore`] reference implementation, and the address domain types.
//! `keyspace-collections` holds everything typed: codec contracts, built-in
//! encoders, composite keys, range resolution, the decoding iterator, the
//! collection types, and the schema registry.
//!
//! The store behind a collection is bound per call — each operation takes
//! the context explicitly — so transactions, snapshots, and isolation stay
//! entirely with the host engine.

// Re-export the public API from the member crates
pub use keyspace_core::{
    AccountAddress, AddressError, Error, MemStore, RawEntry, Result, Store, ValidatorAddress,
};

pub use keyspace_collections::{
    join, AccAddressKey, AccAddressValue, BincodeValue, CollectionDescriptor, CollectionKind,
    DecKey, DecValue, FieldDescriptor, Item, Iter, KeyBound, KeyEncoder, Map, Namespace, Order,
    Pair, PairKey, PairRange, Range, RangeValues, Ranger, Schema, SchemaDescriptor, SchemaError,
    Sequence, StringKey, StringValue, TimeKey, U64Key, U64Value, UnitKey, ValAddressKey,
    ValueEncoder,
};
