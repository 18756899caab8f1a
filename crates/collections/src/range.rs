//! Range descriptors and physical bound resolution.
//!
//! A range describes a scan logically — optional prefix, optional
//! inclusive/exclusive bounds on either side, direction — and is resolved
//! here into the raw inclusive-start/exclusive-end byte bounds the store
//! understands:
//!
//! - physical prefix = `[namespace] ++ encode(range prefix)`
//! - start: none → the prefix itself; exclusive → the encoded bound bumped
//!   to its tightest successor (append `0x00`)
//! - end: inclusive → bumped the same way (the store end is exclusive);
//!   none → the prefix successor (increment the last non-`0xFF` byte,
//!   truncating trailing `0xFF`s; unbounded if the prefix is all `0xFF`)
//!
//! The bump relies on encoder prefix-freedom: no stored key sorts strictly
//! between `enc(k)` and `enc(k) ++ 0x00` unless it has `enc(k)` as a strict
//! prefix, which prefix-freedom rules out.

use keyspace_core::Result;

use crate::codec::KeyEncoder;
use crate::pair::Pair;

/// Scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Byte-lexicographic (and therefore domain) order.
    #[default]
    Ascending,
    /// Reverse order.
    Descending,
}

/// One endpoint of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBound<K> {
    /// The typed bound key.
    pub key: K,
    /// Whether the bound itself is part of the range.
    pub inclusive: bool,
}

impl<K> KeyBound<K> {
    /// An inclusive bound.
    pub fn inclusive(key: K) -> Self {
        Self {
            key,
            inclusive: true,
        }
    }

    /// An exclusive bound.
    pub fn exclusive(key: K) -> Self {
        Self {
            key,
            inclusive: false,
        }
    }
}

/// The logical content of a range, produced by [`Ranger`] implementations
/// and consumed by bound resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeValues<K> {
    /// Optional typed prefix restricting the scan.
    pub prefix: Option<K>,
    /// Optional lower bound.
    pub start: Option<KeyBound<K>>,
    /// Optional upper bound.
    pub end: Option<KeyBound<K>>,
    /// Scan direction.
    pub order: Order,
}

/// Anything that can describe a scan over keys of type `Key`.
pub trait Ranger {
    /// The key type being ranged over.
    type Key;

    /// Surface the logical range content.
    fn into_range_values(self) -> RangeValues<Self::Key>;
}

/// Fluent range descriptor over a simple key.
///
/// An empty range (`Range::new()`) scans the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range<K> {
    prefix: Option<K>,
    start: Option<KeyBound<K>>,
    end: Option<KeyBound<K>>,
    order: Order,
}

impl<K> Range<K> {
    /// An unrestricted ascending range.
    pub fn new() -> Self {
        Self {
            prefix: None,
            start: None,
            end: None,
            order: Order::Ascending,
        }
    }

    /// Restrict the scan to keys starting with `key`'s encoding.
    pub fn prefix(mut self, key: K) -> Self {
        self.prefix = Some(key);
        self
    }

    /// Start at `key`, including it.
    pub fn start_inclusive(mut self, key: K) -> Self {
        self.start = Some(KeyBound::inclusive(key));
        self
    }

    /// Start just after `key`.
    pub fn start_exclusive(mut self, key: K) -> Self {
        self.start = Some(KeyBound::exclusive(key));
        self
    }

    /// End at `key`, including it.
    pub fn end_inclusive(mut self, key: K) -> Self {
        self.end = Some(KeyBound::inclusive(key));
        self
    }

    /// End just before `key`.
    pub fn end_exclusive(mut self, key: K) -> Self {
        self.end = Some(KeyBound::exclusive(key));
        self
    }

    /// Traverse in reverse order.
    pub fn descending(mut self) -> Self {
        self.order = Order::Descending;
        self
    }
}

impl<K> Default for Range<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Ranger for Range<K> {
    type Key = K;

    fn into_range_values(self) -> RangeValues<K> {
        RangeValues {
            prefix: self.prefix,
            start: self.start,
            end: self.end,
            order: self.order,
        }
    }
}

/// Range descriptor over a [`Pair`] key: fixes the first component and
/// bounds only the second.
///
/// `PairRange::new().prefix(a)` scans every pair whose first component is
/// `a`; adding second-component bounds narrows the scan within that prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairRange<A, B> {
    prefix: Option<A>,
    start: Option<KeyBound<B>>,
    end: Option<KeyBound<B>>,
    order: Order,
}

impl<A, B> PairRange<A, B> {
    /// An unrestricted ascending range over the whole pair space.
    pub fn new() -> Self {
        Self {
            prefix: None,
            start: None,
            end: None,
            order: Order::Ascending,
        }
    }

    /// Fix the first component.
    pub fn prefix(mut self, a: A) -> Self {
        self.prefix = Some(a);
        self
    }

    /// Bound the second component from below, inclusive.
    pub fn start_inclusive(mut self, b: B) -> Self {
        self.start = Some(KeyBound::inclusive(b));
        self
    }

    /// Bound the second component from below, exclusive.
    pub fn start_exclusive(mut self, b: B) -> Self {
        self.start = Some(KeyBound::exclusive(b));
        self
    }

    /// Bound the second component from above, inclusive.
    pub fn end_inclusive(mut self, b: B) -> Self {
        self.end = Some(KeyBound::inclusive(b));
        self
    }

    /// Bound the second component from above, exclusive.
    pub fn end_exclusive(mut self, b: B) -> Self {
        self.end = Some(KeyBound::exclusive(b));
        self
    }

    /// Traverse in reverse order.
    pub fn descending(mut self) -> Self {
        self.order = Order::Descending;
        self
    }
}

impl<A, B> Default for PairRange<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> Ranger for PairRange<A, B> {
    type Key = Pair<A, B>;

    fn into_range_values(self) -> RangeValues<Pair<A, B>> {
        RangeValues {
            prefix: self.prefix.map(Pair::from_first),
            start: self.start.map(|bound| KeyBound {
                key: Pair::from_second(bound.key),
                inclusive: bound.inclusive,
            }),
            end: self.end.map(|bound| KeyBound {
                key: Pair::from_second(bound.key),
                inclusive: bound.inclusive,
            }),
            order: self.order,
        }
    }
}

/// Resolved physical store bounds: inclusive start, exclusive end
/// (`None` = unbounded), plus direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PhysicalBounds {
    pub(crate) start: Vec<u8>,
    pub(crate) end: Option<Vec<u8>>,
    pub(crate) order: Order,
}

/// Resolve a logical range into physical store bounds under `namespace`.
pub(crate) fn resolve_bounds<KC: KeyEncoder>(
    codec: &KC,
    namespace: &[u8],
    values: RangeValues<KC::Key>,
) -> Result<PhysicalBounds> {
    let mut prefix = namespace.to_vec();
    if let Some(p) = &values.prefix {
        prefix.extend(codec.encode(p)?);
    }

    let start = match &values.start {
        None => prefix.clone(),
        Some(bound) => {
            let mut s = prefix.clone();
            s.extend(codec.encode(&bound.key)?);
            if !bound.inclusive {
                s.push(0x00);
            }
            s
        }
    };

    let end = match &values.end {
        Some(bound) => {
            let mut e = prefix.clone();
            e.extend(codec.encode(&bound.key)?);
            if bound.inclusive {
                e.push(0x00);
            }
            Some(e)
        }
        None => prefix_successor(&prefix),
    };

    Ok(PhysicalBounds {
        start,
        end,
        order: values.order,
    })
}

/// Smallest byte string strictly greater than every string starting with
/// `prefix`, or `None` if no such string exists (all-`0xFF` prefix).
pub(crate) fn prefix_successor(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut out = prefix.to_vec();
    while let Some(last) = out.last_mut() {
        if *last == 0xFF {
            out.pop();
        } else {
            *last += 1;
            return Some(out);
        }
    }
    None
}
