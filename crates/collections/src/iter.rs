//! Typed decoding iterator over a raw store cursor.
//!
//! Produced only by `Map::iterate`. Single-pass, direction fixed at
//! creation; consuming it advances the underlying cursor, so re-iterating
//! means calling `iterate` again.
//!
//! Decode failures are fatal for the iteration, not skipped: a key or value
//! that no longer decodes means the wrong codec is bound to the namespace or
//! the data is corrupt, and silently dropping entries would turn that bug
//! into wrong scan results.

use keyspace_core::store::RawEntry;
use keyspace_core::{Error, Result};
use tracing::error;

use crate::codec::{KeyEncoder, ValueEncoder};
use crate::schema::Namespace;

/// Lazy, ordered, typed traversal of one collection range.
pub struct Iter<'a, KC: KeyEncoder, VC: ValueEncoder> {
    raw: Box<dyn Iterator<Item = RawEntry> + 'a>,
    key_codec: &'a KC,
    value_codec: &'a VC,
    namespace: Namespace,
}

impl<'a, KC: KeyEncoder, VC: ValueEncoder> Iter<'a, KC, VC> {
    pub(crate) fn new(
        raw: Box<dyn Iterator<Item = RawEntry> + 'a>,
        key_codec: &'a KC,
        value_codec: &'a VC,
        namespace: Namespace,
    ) -> Self {
        Self {
            raw,
            key_codec,
            value_codec,
            namespace,
        }
    }

    fn decode_entry(&self, raw_key: &[u8], raw_value: &[u8]) -> Result<(KC::Key, VC::Value)> {
        let key_bytes = raw_key.get(1..).ok_or_else(|| {
            Error::InvalidKey("physical key is missing its namespace byte".to_string())
        })?;

        let (consumed, key) = self.key_codec.decode(key_bytes).map_err(|e| {
            error!(
                namespace = self.namespace.byte(),
                error = %e,
                "key decode failed during iteration"
            );
            e
        })?;
        if consumed != key_bytes.len() {
            let e = Error::InvalidKey(format!(
                "key decode consumed {consumed} of {} bytes",
                key_bytes.len()
            ));
            error!(
                namespace = self.namespace.byte(),
                error = %e,
                "key decode failed during iteration"
            );
            return Err(e);
        }

        let value = self.value_codec.decode(raw_value).map_err(|e| {
            error!(
                namespace = self.namespace.byte(),
                key = %self.key_codec.stringify(&key),
                error = %e,
                "value decode failed during iteration"
            );
            e
        })?;

        Ok((key, value))
    }

    /// Drain the iteration into just its keys, in iteration order.
    ///
    /// Fails on the first undecodable entry.
    pub fn keys(self) -> Result<Vec<KC::Key>> {
        self.map(|entry| entry.map(|(key, _)| key)).collect()
    }

    /// Drain the iteration into just its values, in iteration order.
    ///
    /// Fails on the first undecodable entry.
    pub fn values(self) -> Result<Vec<VC::Value>> {
        self.map(|entry| entry.map(|(_, value)| value)).collect()
    }

    /// Drain the iteration into `(key, value)` entries, in iteration order.
    ///
    /// Fails on the first undecodable entry.
    pub fn entries(self) -> Result<Vec<(KC::Key, VC::Value)>> {
        self.collect()
    }
}

impl<KC: KeyEncoder, VC: ValueEncoder> Iterator for Iter<'_, KC, VC> {
    type Item = Result<(KC::Key, VC::Value)>;

    fn next(&mut self) -> Option<Self::Item> {
        let (raw_key, raw_value) = self.raw.next()?;
        Some(self.decode_entry(&raw_key, &raw_value))
    }
}
