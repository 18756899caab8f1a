//! The ordered byte-store interface consumed by the collections layer.
//!
//! This is the seam between the typed indexing layer and whatever storage
//! engine hosts the data. The collections layer never talks to a backend
//! except through this trait, and it assumes nothing beyond what the trait
//! states: an ordered, flat, byte-keyed space with point operations and
//! bounded directional scans.
//!
//! ## Context Binding
//!
//! A `Store` value represents one execution context (for example, one
//! transaction). The collections layer is stateless per call and passes the
//! context into every operation, so atomicity and isolation are exactly
//! whatever the context provides. Mutations take `&mut self`, which also
//! gives read-your-writes a natural shape for in-process implementations.

/// A raw key/value entry yielded by a store cursor.
pub type RawEntry = (Vec<u8>, Vec<u8>);

/// Minimal interface over an ordered, byte-keyed store.
///
/// Implementations must iterate keys in byte-lexicographic order; everything
/// the collections layer guarantees about typed ordering is built on that.
pub trait Store {
    /// Get the value stored at `key`, if any.
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Set `key` to `value`, overwriting any prior value.
    fn set(&mut self, key: &[u8], value: Vec<u8>);

    /// Remove `key`. Removing an absent key is a no-op.
    fn delete(&mut self, key: &[u8]);

    /// Whether `key` is present.
    fn has(&self, key: &[u8]) -> bool;

    /// Cursor over entries in `[start, end)` in byte-lexicographic order,
    /// reversed when `ascending` is false. `None` means unbounded on that
    /// side. An inverted range (`start >= end`) yields an empty cursor.
    fn iterate<'a>(
        &'a self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        ascending: bool,
    ) -> Box<dyn Iterator<Item = RawEntry> + 'a>;
}
