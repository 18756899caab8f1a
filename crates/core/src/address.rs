//! Address domain types.
//!
//! Two address namespaces exist: account addresses (`acc1...`) and validator
//! operator addresses (`val1...`). Both wrap raw address bytes and expose a
//! canonical textual form — the human-readable prefix, a `1` separator, then
//! the payload as lowercase hex. The canonical form is what key encoders
//! persist, so parsing is strict: the exact prefix, an even number of hex
//! digits, lowercase only. Anything else fails rather than round-tripping
//! into a different string.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Human-readable prefix for account addresses.
pub const ACCOUNT_HRP: &str = "acc";

/// Human-readable prefix for validator operator addresses.
pub const VALIDATOR_HRP: &str = "val";

/// Maximum payload length in bytes for any address.
pub const MAX_ADDRESS_BYTES: usize = 64;

/// Address validation and parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Address payload is empty.
    #[error("address cannot be empty")]
    Empty,

    /// Address payload exceeds `MAX_ADDRESS_BYTES`.
    #[error("address too long: {actual} bytes exceeds maximum {max}")]
    TooLong {
        /// Actual payload length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Canonical string does not start with the expected prefix.
    #[error("address must start with '{expected}1'")]
    MissingPrefix {
        /// The required human-readable prefix
        expected: &'static str,
    },

    /// Payload is not an even-length lowercase hex string.
    #[error("address payload is not canonical lowercase hex")]
    InvalidHex,
}

fn validate_payload(bytes: &[u8]) -> Result<(), AddressError> {
    if bytes.is_empty() {
        return Err(AddressError::Empty);
    }
    if bytes.len() > MAX_ADDRESS_BYTES {
        return Err(AddressError::TooLong {
            actual: bytes.len(),
            max: MAX_ADDRESS_BYTES,
        });
    }
    Ok(())
}

fn format_address(hrp: &str, bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{hrp}1")?;
    for b in bytes {
        write!(f, "{b:02x}")?;
    }
    Ok(())
}

fn parse_address(hrp: &'static str, s: &str) -> Result<Vec<u8>, AddressError> {
    let payload = s
        .strip_prefix(hrp)
        .and_then(|rest| rest.strip_prefix('1'))
        .ok_or(AddressError::MissingPrefix { expected: hrp })?;

    if payload.is_empty() {
        return Err(AddressError::Empty);
    }
    if payload.len() % 2 != 0 {
        return Err(AddressError::InvalidHex);
    }
    // Uppercase digits parse as hex but are not canonical; reject them so
    // every address has exactly one textual form.
    if !payload
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    {
        return Err(AddressError::InvalidHex);
    }

    let bytes: Vec<u8> = (0..payload.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&payload[i..i + 2], 16))
        .collect::<Result<_, _>>()
        .map_err(|_| AddressError::InvalidHex)?;

    validate_payload(&bytes)?;
    Ok(bytes)
}

/// An account address (`acc1...`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountAddress(Vec<u8>);

impl AccountAddress {
    /// Create an address from raw payload bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, AddressError> {
        let bytes = bytes.into();
        validate_payload(&bytes)?;
        Ok(Self(bytes))
    }

    /// The raw payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_address(ACCOUNT_HRP, &self.0, f)
    }
}

impl FromStr for AccountAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(ACCOUNT_HRP, s).map(Self)
    }
}

/// A validator operator address (`val1...`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidatorAddress(Vec<u8>);

impl ValidatorAddress {
    /// Create an address from raw payload bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, AddressError> {
        let bytes = bytes.into();
        validate_payload(&bytes)?;
        Ok(Self(bytes))
    }

    /// The raw payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ValidatorAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_address(VALIDATOR_HRP, &self.0, f)
    }
}

impl FromStr for ValidatorAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(VALIDATOR_HRP, s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Construction ===

    #[test]
    fn test_new_valid() {
        let addr = AccountAddress::new(vec![0xde, 0xad, 0xbe, 0xef]).unwrap();
        assert_eq!(addr.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_new_empty_rejected() {
        assert_eq!(
            AccountAddress::new(Vec::new()),
            Err(AddressError::Empty)
        );
    }

    #[test]
    fn test_new_too_long_rejected() {
        let result = ValidatorAddress::new(vec![0u8; MAX_ADDRESS_BYTES + 1]);
        assert!(matches!(result, Err(AddressError::TooLong { .. })));
    }

    // === Canonical form ===

    #[test]
    fn test_display_account() {
        let addr = AccountAddress::new(vec![0x00, 0xff, 0x10]).unwrap();
        assert_eq!(addr.to_string(), "acc100ff10");
    }

    #[test]
    fn test_display_validator() {
        let addr = ValidatorAddress::new(vec![0xab]).unwrap();
        assert_eq!(addr.to_string(), "val1ab");
    }

    #[test]
    fn test_roundtrip_through_string() {
        let addr = AccountAddress::new(vec![1, 2, 3, 4, 5]).unwrap();
        let parsed: AccountAddress = addr.to_string().parse().unwrap();
        assert_eq!(parsed, addr);
    }

    // === Parsing ===

    #[test]
    fn test_parse_wrong_prefix() {
        let result = AccountAddress::from_str("val1ab");
        assert_eq!(
            result,
            Err(AddressError::MissingPrefix {
                expected: ACCOUNT_HRP
            })
        );
    }

    #[test]
    fn test_parse_missing_separator() {
        let result = AccountAddress::from_str("accab");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_empty_payload() {
        assert_eq!(AccountAddress::from_str("acc1"), Err(AddressError::Empty));
    }

    #[test]
    fn test_parse_odd_length() {
        assert_eq!(
            AccountAddress::from_str("acc1abc"),
            Err(AddressError::InvalidHex)
        );
    }

    #[test]
    fn test_parse_uppercase_rejected() {
        assert_eq!(
            AccountAddress::from_str("acc1AB"),
            Err(AddressError::InvalidHex)
        );
    }

    #[test]
    fn test_parse_non_hex_rejected() {
        assert_eq!(
            AccountAddress::from_str("acc1zz"),
            Err(AddressError::InvalidHex)
        );
    }

    // === Ordering ===

    #[test]
    fn test_byte_order_matches_canonical_string_order() {
        // lowercase hex preserves byte order, so sorting addresses by their
        // payload or by their canonical string agrees
        let a = AccountAddress::new(vec![0x01]).unwrap();
        let b = AccountAddress::new(vec![0x02]).unwrap();
        let c = AccountAddress::new(vec![0xf0]).unwrap();
        assert!(a < b && b < c);
        assert!(a.to_string() < b.to_string());
        assert!(b.to_string() < c.to_string());
    }
}
