//! Typed, namespaced collections over an ordered byte-keyed store.
//!
//! This crate is the indexing layer: callers declare strongly-typed
//! collections backed by a flat sorted byte-space, and the crate owns the
//! byte layouts, namespace prefixing, and range iteration.
//!
//! - **Codecs**: [`KeyEncoder`] / [`ValueEncoder`] contracts plus built-in
//!   encoders for common key domains (strings, integers, timestamps,
//!   addresses, decimals) and value formats (bincode, primitives)
//! - **Composite keys**: [`Pair`] joins two key encoders into one
//!   prefix-splittable encoding
//! - **Ranges**: [`Range`] / [`PairRange`] describe bounded, directional
//!   scans resolved into raw store bounds
//! - **Collections**: [`Map`], [`Item`], [`Sequence`]
//! - **Schema**: [`Schema`] guarantees namespace and name uniqueness and
//!   produces the introspection descriptor
//!
//! The store itself is an external collaborator behind
//! [`keyspace_core::Store`]; this crate adds no transactions, locking, or
//! persistence of its own.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod iter;
pub mod item;
pub mod keys;
pub mod map;
pub mod pair;
pub mod range;
pub mod schema;
pub mod sequence;
pub mod values;

#[cfg(test)]
mod proptest_tests;

// Re-export commonly used types
pub use codec::{KeyEncoder, ValueEncoder};
pub use iter::Iter;
pub use item::Item;
pub use keys::{AccAddressKey, DecKey, StringKey, TimeKey, U64Key, UnitKey, ValAddressKey};
pub use map::Map;
pub use pair::{join, Pair, PairKey};
pub use range::{KeyBound, Order, PairRange, Range, RangeValues, Ranger};
pub use schema::{
    CollectionDescriptor, CollectionKind, FieldDescriptor, Namespace, Schema, SchemaDescriptor,
    SchemaError,
};
pub use sequence::Sequence;
pub use values::{AccAddressValue, BincodeValue, DecValue, StringValue, U64Value};
