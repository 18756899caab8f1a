//! Property-based tests for the encoder laws.
//!
//! Three laws per encoder, quantified over its domain: round-trip
//! (decode ∘ encode is identity and reports full consumption), order
//! preservation (byte order tracks domain order), and prefix freedom (no
//! encoding is a strict prefix of another).

use chrono::{DateTime, Utc};
use keyspace_core::AccountAddress;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::codec::KeyEncoder;
use crate::keys::{AccAddressKey, DecKey, StringKey, TimeKey, U64Key};
use crate::pair::{join, PairKey};

/// Strategy for valid string keys: non-empty, no interior NUL.
fn arb_string_key() -> impl Strategy<Value = String> {
    any::<String>()
        .prop_map(|s| s.replace('\u{0}', ""))
        .prop_filter("string keys must be non-empty", |s| !s.is_empty())
}

/// Strategy for timestamps inside the sortable window (year <= 9999).
fn arb_time_key() -> impl Strategy<Value = DateTime<Utc>> {
    // 253402300799 is 9999-12-31T23:59:59Z
    (0i64..=253_402_300_799, 0u32..1_000_000_000)
        .prop_map(|(secs, nanos)| DateTime::from_timestamp(secs, nanos).unwrap())
}

/// Strategy for address payloads.
fn arb_address() -> impl Strategy<Value = AccountAddress> {
    prop::collection::vec(any::<u8>(), 1..=64)
        .prop_map(|bytes| AccountAddress::new(bytes).unwrap())
}

/// Strategy for decimals across signs and scales.
fn arb_decimal() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=28).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

proptest! {
    // === Round-trip ===

    #[test]
    fn string_key_roundtrip(s in arb_string_key()) {
        let encoded = StringKey.encode(&s).unwrap();
        let (consumed, decoded) = StringKey.decode(&encoded).unwrap();
        prop_assert_eq!(consumed, encoded.len());
        prop_assert_eq!(decoded, s);
    }

    #[test]
    fn u64_key_roundtrip(n in any::<u64>()) {
        let encoded = U64Key.encode(&n).unwrap();
        let (consumed, decoded) = U64Key.decode(&encoded).unwrap();
        prop_assert_eq!((consumed, decoded), (8, n));
    }

    #[test]
    fn time_key_roundtrip(t in arb_time_key()) {
        let encoded = TimeKey.encode(&t).unwrap();
        prop_assert_eq!(encoded.len(), 29);
        let (consumed, decoded) = TimeKey.decode(&encoded).unwrap();
        prop_assert_eq!(consumed, 29);
        prop_assert_eq!(decoded, t);
    }

    #[test]
    fn address_key_roundtrip(addr in arb_address()) {
        let encoded = AccAddressKey.encode(&addr).unwrap();
        let (consumed, decoded) = AccAddressKey.decode(&encoded).unwrap();
        prop_assert_eq!(consumed, encoded.len());
        prop_assert_eq!(decoded, addr);
    }

    #[test]
    fn dec_key_roundtrip(d in arb_decimal()) {
        let encoded = DecKey.encode(&d).unwrap();
        let (consumed, decoded) = DecKey.decode(&encoded).unwrap();
        prop_assert_eq!(consumed, 16);
        prop_assert_eq!(decoded, d);
    }

    // === Order preservation ===

    #[test]
    fn u64_key_preserves_order(a in any::<u64>(), b in any::<u64>()) {
        prop_assume!(a != b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(U64Key.encode(&lo).unwrap() < U64Key.encode(&hi).unwrap());
    }

    #[test]
    fn time_key_preserves_order(a in arb_time_key(), b in arb_time_key()) {
        prop_assume!(a != b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(TimeKey.encode(&lo).unwrap() < TimeKey.encode(&hi).unwrap());
    }

    // === Prefix freedom ===

    #[test]
    fn string_key_prefix_free(a in arb_string_key(), b in arb_string_key()) {
        prop_assume!(a != b);
        let ea = StringKey.encode(&a).unwrap();
        let eb = StringKey.encode(&b).unwrap();
        prop_assert!(!eb.starts_with(&ea));
        prop_assert!(!ea.starts_with(&eb));
    }

    #[test]
    fn u64_key_prefix_free(a in any::<u64>(), b in any::<u64>()) {
        prop_assume!(a != b);
        let ea = U64Key.encode(&a).unwrap();
        let eb = U64Key.encode(&b).unwrap();
        prop_assert!(!eb.starts_with(&ea));
    }

    #[test]
    fn address_key_prefix_free(a in arb_address(), b in arb_address()) {
        prop_assume!(a != b);
        let ea = AccAddressKey.encode(&a).unwrap();
        let eb = AccAddressKey.encode(&b).unwrap();
        prop_assert!(!eb.starts_with(&ea));
        prop_assert!(!ea.starts_with(&eb));
    }

    // === Composite decode ===

    #[test]
    fn pair_key_roundtrip(a in arb_string_key(), b in any::<u64>()) {
        let codec = PairKey::new(StringKey, U64Key);
        let key = join(a.clone(), b);
        let encoded = codec.encode(&key).unwrap();
        prop_assert_eq!(
            encoded.len(),
            StringKey.encode(&a).unwrap().len() + 8
        );
        let (consumed, decoded) = codec.decode(&encoded).unwrap();
        prop_assert_eq!(consumed, encoded.len());
        prop_assert_eq!(decoded, key);
    }
}
