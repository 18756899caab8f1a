//! Map: the principal typed collection.
//!
//! A `Map` is a stateless typed view over one namespaced sub-region of the
//! store: it owns a namespace byte and a key/value codec pair, and every
//! physical key it touches is `[namespace] ++ encode(key)`. The store
//! context is passed into each operation, so atomicity and visibility are
//! exactly whatever the context provides (one transaction, one block, one
//! in-memory map — the collection does not care).

use keyspace_core::{Error, Result, Store};

use crate::codec::{KeyEncoder, ValueEncoder};
use crate::iter::Iter;
use crate::range::{resolve_bounds, Order, Ranger};
use crate::schema::{
    CollectionDescriptor, CollectionKind, FieldDescriptor, Namespace, Schema, SchemaError,
};

/// Typed key-value collection over a namespaced region of the store.
#[derive(Debug, Clone)]
pub struct Map<KC: KeyEncoder, VC: ValueEncoder> {
    namespace: Namespace,
    key_codec: KC,
    value_codec: VC,
    key_name: String,
    value_name: String,
}

impl<KC: KeyEncoder, VC: ValueEncoder> Map<KC, VC> {
    /// Create a map and register it against `schema`.
    ///
    /// Fails if the namespace or name collides with an already-registered
    /// collection, or if the name is not a valid identifier — all wiring
    /// errors, surfaced before the collection can serve a single request.
    pub fn new(
        schema: &mut Schema,
        namespace: u8,
        key_name: &str,
        key_codec: KC,
        value_name: &str,
        value_codec: VC,
    ) -> std::result::Result<Self, SchemaError> {
        let map = Self::unregistered(
            Namespace::new(namespace),
            key_name,
            key_codec,
            value_name,
            value_codec,
        );
        schema.add_collection(map.descriptor_with_kind(CollectionKind::Map))?;
        Ok(map)
    }

    pub(crate) fn unregistered(
        namespace: Namespace,
        key_name: &str,
        key_codec: KC,
        value_name: &str,
        value_codec: VC,
    ) -> Self {
        Self {
            namespace,
            key_codec,
            value_codec,
            key_name: key_name.to_string(),
            value_name: value_name.to_string(),
        }
    }

    pub(crate) fn descriptor_with_kind(&self, kind: CollectionKind) -> CollectionDescriptor {
        CollectionDescriptor {
            kind,
            namespace: self.namespace,
            name: self.value_name.clone(),
            key: FieldDescriptor {
                name: self.key_name.clone(),
                type_name: self.key_codec.type_name(),
            },
            value: FieldDescriptor {
                name: self.value_name.clone(),
                type_name: self.value_codec.type_name(),
            },
        }
    }

    fn physical_key(&self, key: &KC::Key) -> Result<Vec<u8>> {
        let mut out = self.namespace.prefix().to_vec();
        out.extend(self.key_codec.encode(key)?);
        Ok(out)
    }

    fn not_found(&self, key: &KC::Key) -> Error {
        Error::NotFound {
            type_name: self.value_codec.type_name(),
            key: self.key_codec.stringify(key),
        }
    }

    /// Write `value` at `key`, overwriting any prior value.
    pub fn insert<S: Store>(&self, store: &mut S, key: &KC::Key, value: &VC::Value) -> Result<()> {
        let physical = self.physical_key(key)?;
        let raw = self.value_codec.encode(value)?;
        store.set(&physical, raw);
        Ok(())
    }

    /// Read the value at `key`, failing with `NotFound` if absent.
    pub fn get<S: Store>(&self, store: &S, key: &KC::Key) -> Result<VC::Value> {
        let physical = self.physical_key(key)?;
        match store.get(&physical) {
            Some(raw) => self.value_codec.decode(&raw),
            None => Err(self.not_found(key)),
        }
    }

    /// Read the value at `key`, or `default` if absent.
    ///
    /// Only `NotFound` is absorbed; a value that fails to decode is a data
    /// or schema bug and propagates.
    pub fn get_or<S: Store>(
        &self,
        store: &S,
        key: &KC::Key,
        default: VC::Value,
    ) -> Result<VC::Value> {
        match self.get(store, key) {
            Err(e) if e.is_not_found() => Ok(default),
            other => other,
        }
    }

    /// Whether `key` is present.
    pub fn has<S: Store>(&self, store: &S, key: &KC::Key) -> Result<bool> {
        Ok(store.has(&self.physical_key(key)?))
    }

    /// Remove `key`, failing with `NotFound` if it was absent.
    pub fn delete<S: Store>(&self, store: &mut S, key: &KC::Key) -> Result<()> {
        let physical = self.physical_key(key)?;
        if !store.has(&physical) {
            return Err(self.not_found(key));
        }
        store.delete(&physical);
        Ok(())
    }

    /// Scan the collection over `range`.
    ///
    /// The returned iterator decodes lazily and is single-pass; see
    /// [`Iter`] for the corruption policy.
    pub fn iterate<'a, S, R>(&'a self, store: &'a S, range: R) -> Result<Iter<'a, KC, VC>>
    where
        S: Store,
        R: Ranger<Key = KC::Key>,
    {
        let bounds = resolve_bounds(
            &self.key_codec,
            &self.namespace.prefix(),
            range.into_range_values(),
        )?;
        let ascending = bounds.order == Order::Ascending;
        let raw = store.iterate(Some(bounds.start.as_slice()), bounds.end.as_deref(), ascending);
        Ok(Iter::new(
            raw,
            &self.key_codec,
            &self.value_codec,
            self.namespace,
        ))
    }

    /// The collection's descriptor, for schema introspection.
    pub fn descriptor(&self) -> CollectionDescriptor {
        self.descriptor_with_kind(CollectionKind::Map)
    }
}
