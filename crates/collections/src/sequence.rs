//! Sequence: a monotonically incrementing counter.
//!
//! A `Sequence` is an `Item<u64>` with read-modify-write semantics: `next`
//! returns the current value and advances the counter by one. The
//! read-modify-write is exactly as atomic as the host context makes it —
//! this layer adds no locking (see the crate concurrency notes).

use keyspace_core::{Result, Store};

use crate::item::Item;
use crate::schema::{CollectionDescriptor, CollectionKind, Namespace, Schema, SchemaError};
use crate::values::U64Value;

/// Auto-incrementing `u64` counter, seeded at construction.
#[derive(Debug, Clone)]
pub struct Sequence {
    item: Item<U64Value>,
    start: u64,
}

impl Sequence {
    /// Create a sequence starting at `start` and register it against
    /// `schema`.
    pub fn new(
        schema: &mut Schema,
        namespace: u8,
        name: &str,
        start: u64,
    ) -> std::result::Result<Self, SchemaError> {
        let item = Item::unregistered(Namespace::new(namespace), name, U64Value);
        schema.add_collection(item.descriptor_with_kind(CollectionKind::Sequence))?;
        Ok(Self { item, start })
    }

    /// Return the current counter value and advance it by one.
    ///
    /// The first call returns the construction seed.
    pub fn next<S: Store>(&self, store: &mut S) -> Result<u64> {
        let current = self.item.get_or(store, self.start)?;
        self.item.set(store, &current.wrapping_add(1))?;
        Ok(current)
    }

    /// Return the value `next` would hand out, without advancing.
    pub fn peek<S: Store>(&self, store: &S) -> Result<u64> {
        self.item.get_or(store, self.start)
    }

    /// Force-position the counter so the following `next` returns `value`.
    pub fn set<S: Store>(&self, store: &mut S, value: u64) -> Result<()> {
        self.item.set(store, &value)
    }

    /// The collection's descriptor, for schema introspection.
    pub fn descriptor(&self) -> CollectionDescriptor {
        self.item.descriptor_with_kind(CollectionKind::Sequence)
    }
}
