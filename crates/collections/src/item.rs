//! Item: a single-cell collection.
//!
//! An `Item<VC>` is a degenerate map whose only key is the empty unit key —
//! the cell lives at the bare namespace byte. Useful for module parameters
//! and other singletons.

use keyspace_core::{Result, Store};

use crate::codec::ValueEncoder;
use crate::keys::UnitKey;
use crate::map::Map;
use crate::schema::{CollectionDescriptor, CollectionKind, Namespace, Schema, SchemaError};

/// A single typed value cell.
#[derive(Debug, Clone)]
pub struct Item<VC: ValueEncoder> {
    map: Map<UnitKey, VC>,
}

impl<VC: ValueEncoder> Item<VC> {
    /// Create an item and register it against `schema`.
    pub fn new(
        schema: &mut Schema,
        namespace: u8,
        name: &str,
        value_codec: VC,
    ) -> std::result::Result<Self, SchemaError> {
        let item = Self::unregistered(Namespace::new(namespace), name, value_codec);
        schema.add_collection(item.descriptor_with_kind(CollectionKind::Item))?;
        Ok(item)
    }

    pub(crate) fn unregistered(namespace: Namespace, name: &str, value_codec: VC) -> Self {
        Self {
            map: Map::unregistered(namespace, "unit", UnitKey, name, value_codec),
        }
    }

    pub(crate) fn descriptor_with_kind(&self, kind: CollectionKind) -> CollectionDescriptor {
        self.map.descriptor_with_kind(kind)
    }

    /// Read the cell, failing with `NotFound` if it was never set.
    pub fn get<S: Store>(&self, store: &S) -> Result<VC::Value> {
        self.map.get(store, &())
    }

    /// Read the cell, or `default` if it was never set.
    pub fn get_or<S: Store>(&self, store: &S, default: VC::Value) -> Result<VC::Value> {
        self.map.get_or(store, &(), default)
    }

    /// Write the cell, overwriting any prior value.
    pub fn set<S: Store>(&self, store: &mut S, value: &VC::Value) -> Result<()> {
        self.map.insert(store, &(), value)
    }

    /// Clear the cell, failing with `NotFound` if it was never set.
    pub fn delete<S: Store>(&self, store: &mut S) -> Result<()> {
        self.map.delete(store, &())
    }

    /// Whether the cell has been set.
    pub fn exists<S: Store>(&self, store: &S) -> Result<bool> {
        self.map.has(store, &())
    }

    /// The collection's descriptor, for schema introspection.
    pub fn descriptor(&self) -> CollectionDescriptor {
        self.descriptor_with_kind(CollectionKind::Item)
    }
}
