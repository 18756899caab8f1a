//! Schema registry and collection metadata.
//!
//! A `Schema` is a construction-time registry, not a persisted object: its
//! only job is to guarantee that every collection in a module gets a unique
//! namespace byte and a unique, well-formed name, and to accumulate the
//! descriptor document that introspection and genesis tooling consume.
//!
//! Registration failures are wiring bugs, so they surface as explicit
//! `SchemaError` results from collection constructors — the process fails
//! fast at startup instead of misrouting reads at request time.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// A single byte identifying a collection's region within the flat store.
///
/// Every physical key of the collection is prefixed with this byte; the
/// schema guarantees no two collections share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Namespace(u8);

impl Namespace {
    /// Wrap a namespace byte.
    pub const fn new(byte: u8) -> Self {
        Self(byte)
    }

    /// The raw namespace byte.
    pub const fn byte(self) -> u8 {
        self.0
    }

    pub(crate) const fn prefix(self) -> [u8; 1] {
        [self.0]
    }
}

impl From<u8> for Namespace {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

/// What shape of collection a descriptor describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    /// A keyed collection.
    Map,
    /// A single-cell value.
    Item,
    /// An auto-incrementing counter.
    Sequence,
}

/// Name and type of one side (key or value) of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Display name.
    pub name: String,
    /// Codec-reported type name.
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Introspection record for one registered collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionDescriptor {
    /// Collection shape.
    pub kind: CollectionKind,
    /// Namespace byte.
    pub namespace: Namespace,
    /// Display name, unique within the schema.
    pub name: String,
    /// Key side.
    pub key: FieldDescriptor,
    /// Value side.
    pub value: FieldDescriptor,
}

/// Ordered, serializable description of every collection in a schema.
///
/// Stable for tooling and diagnostics; not a wire-compatibility promise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaDescriptor {
    /// Descriptors in registration order.
    pub collections: Vec<CollectionDescriptor>,
}

/// Schema registration errors — programming mistakes at wiring time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two collections claimed the same namespace byte.
    #[error("namespace {namespace} already registered by collection '{existing}'")]
    NamespaceTaken {
        /// The contested namespace byte
        namespace: u8,
        /// Name of the collection already holding it
        existing: String,
    },

    /// Two collections claimed the same display name.
    #[error("collection name '{0}' already registered")]
    NameTaken(String),

    /// A display name that is not a valid identifier.
    #[error("collection name '{0}' must match [A-Za-z][A-Za-z0-9_]*")]
    InvalidName(String),
}

/// Per-module registry of collections.
///
/// Built once at wiring time by the collection constructors; holds no data
/// and is never persisted.
#[derive(Debug, Default)]
pub struct Schema {
    descriptor: SchemaDescriptor,
    by_namespace: BTreeMap<u8, String>,
    names: BTreeSet<String>,
}

impl Schema {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated descriptor document, in registration order.
    pub fn descriptor(&self) -> &SchemaDescriptor {
        &self.descriptor
    }

    /// Number of registered collections.
    pub fn len(&self) -> usize {
        self.descriptor.collections.len()
    }

    /// Whether no collections are registered.
    pub fn is_empty(&self) -> bool {
        self.descriptor.collections.is_empty()
    }

    pub(crate) fn add_collection(
        &mut self,
        desc: CollectionDescriptor,
    ) -> Result<(), SchemaError> {
        if !valid_name(&desc.name) {
            return Err(SchemaError::InvalidName(desc.name));
        }
        if let Some(existing) = self.by_namespace.get(&desc.namespace.byte()) {
            return Err(SchemaError::NamespaceTaken {
                namespace: desc.namespace.byte(),
                existing: existing.clone(),
            });
        }
        if self.names.contains(&desc.name) {
            return Err(SchemaError::NameTaken(desc.name));
        }

        debug!(
            namespace = desc.namespace.byte(),
            name = %desc.name,
            kind = ?desc.kind,
            "registered collection"
        );
        self.by_namespace
            .insert(desc.namespace.byte(), desc.name.clone());
        self.names.insert(desc.name.clone());
        self.descriptor.collections.push(desc);
        Ok(())
    }
}

fn valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
