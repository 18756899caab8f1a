//! Composite two-part keys.
//!
//! A `Pair<A, B>` key is encoded as `encode(a) ++ encode(b)`. Because the
//! first component's encoder is prefix-free, the concatenation splits back
//! unambiguously, and "all pairs whose first component equals `a`" is a
//! valid byte-range prefix — which is what [`PairRange`](crate::range::PairRange)
//! exploits for prefix scans.
//!
//! Both components are optional inside the struct so the same type serves
//! complete keys (both set, built with [`join`]) and range prefixes (only
//! the first set). Decoding always yields a complete pair.

use keyspace_core::Result;

use crate::codec::KeyEncoder;

/// A composite key of two components.
///
/// Build complete keys with [`join`]; partially-set pairs are produced
/// internally by range builders and encode only their set components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<A, B> {
    a: Option<A>,
    b: Option<B>,
}

/// Join two components into a complete composite key.
pub fn join<A, B>(a: A, b: B) -> Pair<A, B> {
    Pair {
        a: Some(a),
        b: Some(b),
    }
}

impl<A, B> Pair<A, B> {
    /// The first component, if set.
    pub fn first(&self) -> Option<&A> {
        self.a.as_ref()
    }

    /// The second component, if set.
    pub fn second(&self) -> Option<&B> {
        self.b.as_ref()
    }

    /// Split the pair into its components.
    pub fn into_parts(self) -> (Option<A>, Option<B>) {
        (self.a, self.b)
    }

    /// A pair with only the first component set (a range prefix).
    pub(crate) fn from_first(a: A) -> Self {
        Pair { a: Some(a), b: None }
    }

    /// A pair with only the second component set (a range bound under a
    /// fixed prefix).
    pub(crate) fn from_second(b: B) -> Self {
        Pair { a: None, b: Some(b) }
    }
}

/// Composite key encoder joining two key encoders.
///
/// `KA` must be prefix-free (see [`KeyEncoder`] docs); full-buffer decoders
/// like `TimeKey` and `DecKey` are only legal as `KB`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairKey<KA, KB> {
    first: KA,
    second: KB,
}

impl<KA, KB> PairKey<KA, KB> {
    /// Join two key encoders into a composite encoder.
    pub const fn new(first: KA, second: KB) -> Self {
        Self { first, second }
    }
}

impl<KA, KB> KeyEncoder for PairKey<KA, KB>
where
    KA: KeyEncoder,
    KB: KeyEncoder,
{
    type Key = Pair<KA::Key, KB::Key>;

    fn encode(&self, key: &Self::Key) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        if let Some(a) = &key.a {
            out.extend(self.first.encode(a)?);
        }
        if let Some(b) = &key.b {
            out.extend(self.second.encode(b)?);
        }
        Ok(out)
    }

    fn decode(&self, buf: &[u8]) -> Result<(usize, Self::Key)> {
        let (consumed_a, a) = self.first.decode(buf)?;
        let (consumed_b, b) = self.second.decode(&buf[consumed_a..])?;
        Ok((consumed_a + consumed_b, join(a, b)))
    }

    fn stringify(&self, key: &Self::Key) -> String {
        let a = key
            .a
            .as_ref()
            .map_or_else(|| "_".to_string(), |a| self.first.stringify(a));
        let b = key
            .b
            .as_ref()
            .map_or_else(|| "_".to_string(), |b| self.second.stringify(b));
        format!("({a}, {b})")
    }

    fn type_name(&self) -> String {
        format!(
            "Pair<{}, {}>",
            self.first.type_name(),
            self.second.type_name()
        )
    }
}
