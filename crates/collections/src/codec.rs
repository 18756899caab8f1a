//! Key and value codec trait definitions.
//!
//! Everything in this crate is generic over these two traits. Codecs are
//! zero-sized strategy values held inside each collection, so encode/decode
//! dispatch is resolved at compile time — no reflection, no trait objects on
//! the hot path, and binding the wrong codec to a collection is a type error.

use keyspace_core::Result;

/// Codec for typed collection keys.
///
/// A key encoder is a pure, deterministic, bijective-within-its-domain
/// mapping between a typed key and a byte sequence.
///
/// # Ordering Contract
///
/// Unless documented otherwise, the byte-lexicographic order of encodings
/// must match the key domain's natural total order. Range queries are
/// resolved purely in byte space, so an encoder that breaks this contract
/// silently returns wrong scan results.
///
/// # Prefix Freedom
///
/// Unless documented otherwise, no valid encoding may be a strict byte
/// prefix of another valid encoding. Composite keys concatenate component
/// encodings and rely on this to split them unambiguously; a non-prefix-free
/// encoder in first position corrupts prefix scans silently.
pub trait KeyEncoder {
    /// The typed key this codec handles.
    type Key;

    /// Encode `key` into bytes.
    fn encode(&self, key: &Self::Key) -> Result<Vec<u8>>;

    /// Decode a key from the front of `buf`.
    ///
    /// Returns the number of bytes consumed along with the decoded key, so
    /// variable-length keys can be embedded in larger buffers (composite
    /// keys). Fails with `Error::InvalidKey` on malformed input; it must
    /// never panic on attacker-controlled bytes.
    fn decode(&self, buf: &[u8]) -> Result<(usize, Self::Key)>;

    /// Human-readable rendering of `key` for diagnostics and logging.
    fn stringify(&self, key: &Self::Key) -> String;

    /// Name of the key type, for schema metadata.
    fn type_name(&self) -> String;
}

/// Codec for typed collection values.
///
/// Bijective, but with no ordering requirement — values are never scanned by
/// range. `decode` consumes the whole buffer.
pub trait ValueEncoder {
    /// The typed value this codec handles.
    type Value;

    /// Encode `value` into bytes.
    fn encode(&self, value: &Self::Value) -> Result<Vec<u8>>;

    /// Decode a value from `buf`, consuming the whole buffer.
    ///
    /// Fails with `Error::InvalidValue` on malformed input.
    fn decode(&self, buf: &[u8]) -> Result<Self::Value>;

    /// Human-readable rendering of `value` for diagnostics and logging.
    fn stringify(&self, value: &Self::Value) -> String;

    /// Name of the value type, for schema metadata.
    fn type_name(&self) -> String;
}

/// Strip module paths from a Rust type name, keeping generic structure:
/// `std::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub(crate) fn short_type_name<T>() -> String {
    std::any::type_name::<T>()
        .split('<')
        .map(|segment| segment.rsplit("::").next().unwrap_or(segment))
        .collect::<Vec<_>>()
        .join("<")
}
