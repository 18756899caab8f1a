//! Built-in key encoders.
//!
//! Each encoder documents its physical byte layout; together with the
//! namespace byte these layouts are the only wire format this crate defines.
//! All encoders here are order-preserving within their domain. `StringKey`,
//! `U64Key`, and the address keys are also prefix-free and therefore legal
//! as the first component of a [`Pair`](crate::pair::Pair); `TimeKey` and
//! `DecKey` consume the whole buffer on decode and must only appear in last
//! (or sole) position.

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Utc};
use keyspace_core::{AccountAddress, Error, Result, ValidatorAddress};
use rust_decimal::Decimal;

use crate::codec::KeyEncoder;

/// Key encoder for `String`.
///
/// Layout: the UTF-8 bytes followed by a single `0x00` terminator. The
/// terminator makes the encoding prefix-free while leaving byte order equal
/// to natural string order up to the terminator. `0x00` is forbidden inside
/// the payload; encode fails rather than producing an ambiguous layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringKey;

impl KeyEncoder for StringKey {
    type Key = String;

    fn encode(&self, key: &String) -> Result<Vec<u8>> {
        if let Some(idx) = key.bytes().position(|b| b == 0) {
            return Err(Error::InvalidKey(format!(
                "string key contains NUL byte at index {idx}: {key}"
            )));
        }
        let mut out = Vec::with_capacity(key.len() + 1);
        out.extend_from_slice(key.as_bytes());
        out.push(0);
        Ok(out)
    }

    fn decode(&self, buf: &[u8]) -> Result<(usize, String)> {
        if buf.len() < 2 {
            return Err(Error::InvalidKey(format!(
                "string key buffer too short: {} bytes",
                buf.len()
            )));
        }
        let idx = buf.iter().position(|&b| b == 0).ok_or_else(|| {
            Error::InvalidKey("string key buffer is not NUL terminated".to_string())
        })?;
        let s = std::str::from_utf8(&buf[..idx])
            .map_err(|e| Error::InvalidKey(format!("string key is not valid UTF-8: {e}")))?;
        Ok((idx + 1, s.to_string()))
    }

    fn stringify(&self, key: &String) -> String {
        key.clone()
    }

    fn type_name(&self) -> String {
        "string".to_string()
    }
}

/// Key encoder for `u64`.
///
/// Layout: fixed 8-byte big-endian, so numeric order equals byte order.
/// Decode consumes exactly 8 bytes and requires at least 8, which keeps the
/// encoding fixed-width prefix-free and usable as a leading pair component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct U64Key;

impl KeyEncoder for U64Key {
    type Key = u64;

    fn encode(&self, key: &u64) -> Result<Vec<u8>> {
        Ok(key.to_be_bytes().to_vec())
    }

    fn decode(&self, buf: &[u8]) -> Result<(usize, u64)> {
        let bytes: [u8; 8] = buf
            .get(..8)
            .and_then(|head| head.try_into().ok())
            .ok_or_else(|| {
                Error::InvalidKey(format!("u64 key needs 8 bytes, got {}", buf.len()))
            })?;
        Ok((8, u64::from_be_bytes(bytes)))
    }

    fn stringify(&self, key: &u64) -> String {
        key.to_string()
    }

    fn type_name(&self) -> String {
        "u64".to_string()
    }
}

/// Fixed-width sortable layout: `YYYY-MM-DDTHH:MM:SS.nnnnnnnnn` (29 bytes).
const TIME_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.9f";

/// Key encoder for `chrono::DateTime<Utc>`.
///
/// Layout: the 29-byte fixed-width UTC text form above; chronological order
/// equals byte order for years 0000 through 9999, and encode rejects
/// anything outside that window. Decode consumes the whole buffer, so this
/// encoder is not prefix-free — never use it as the first component of a
/// pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeKey;

impl KeyEncoder for TimeKey {
    type Key = DateTime<Utc>;

    fn encode(&self, key: &DateTime<Utc>) -> Result<Vec<u8>> {
        let year = key.year();
        if !(0..=9999).contains(&year) {
            return Err(Error::InvalidKey(format!(
                "time key year {year} is outside the sortable window 0000-9999"
            )));
        }
        Ok(key.naive_utc().format(TIME_LAYOUT).to_string().into_bytes())
    }

    fn decode(&self, buf: &[u8]) -> Result<(usize, DateTime<Utc>)> {
        let s = std::str::from_utf8(buf)
            .map_err(|e| Error::InvalidKey(format!("time key is not valid UTF-8: {e}")))?;
        let naive = NaiveDateTime::parse_from_str(s, TIME_LAYOUT)
            .map_err(|e| Error::InvalidKey(format!("time key: {e}")))?;
        Ok((buf.len(), Utc.from_utc_datetime(&naive)))
    }

    fn stringify(&self, key: &DateTime<Utc>) -> String {
        key.to_rfc3339()
    }

    fn type_name(&self) -> String {
        "time".to_string()
    }
}

/// Key encoder for [`AccountAddress`].
///
/// The address is rendered to its canonical string and run through
/// [`StringKey`], so the layout inherits string-key prefix freedom and sorts
/// by canonical text. Decode reverses through `StringKey` and re-validates
/// the canonical form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccAddressKey;

impl KeyEncoder for AccAddressKey {
    type Key = AccountAddress;

    fn encode(&self, key: &AccountAddress) -> Result<Vec<u8>> {
        StringKey.encode(&key.to_string())
    }

    fn decode(&self, buf: &[u8]) -> Result<(usize, AccountAddress)> {
        let (consumed, s) = StringKey.decode(buf)?;
        let addr = s
            .parse::<AccountAddress>()
            .map_err(|e| Error::InvalidKey(format!("account address key: {e}")))?;
        Ok((consumed, addr))
    }

    fn stringify(&self, key: &AccountAddress) -> String {
        key.to_string()
    }

    fn type_name(&self) -> String {
        "account_address".to_string()
    }
}

/// Key encoder for [`ValidatorAddress`].
///
/// Same layout and contract as [`AccAddressKey`], for the validator address
/// namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValAddressKey;

impl KeyEncoder for ValAddressKey {
    type Key = ValidatorAddress;

    fn encode(&self, key: &ValidatorAddress) -> Result<Vec<u8>> {
        StringKey.encode(&key.to_string())
    }

    fn decode(&self, buf: &[u8]) -> Result<(usize, ValidatorAddress)> {
        let (consumed, s) = StringKey.decode(buf)?;
        let addr = s
            .parse::<ValidatorAddress>()
            .map_err(|e| Error::InvalidKey(format!("validator address key: {e}")))?;
        Ok((consumed, addr))
    }

    fn stringify(&self, key: &ValidatorAddress) -> String {
        key.to_string()
    }

    fn type_name(&self) -> String {
        "validator_address".to_string()
    }
}

const DEC_KEY_LEN: usize = 16;
const MAX_DEC_SCALE: u8 = 28;

/// Key encoder for `rust_decimal::Decimal`.
///
/// Layout: the decimal's canonical 16-byte binary form. Byte order does NOT
/// track numeric order for mixed-sign values — use this key only where scan
/// order is irrelevant or the domain is known to be a single sign and
/// magnitude shape. Decode consumes the whole buffer after checking the
/// canonical flag bytes, so the encoder is also not prefix-free.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecKey;

impl KeyEncoder for DecKey {
    type Key = Decimal;

    fn encode(&self, key: &Decimal) -> Result<Vec<u8>> {
        Ok(key.serialize().to_vec())
    }

    fn decode(&self, buf: &[u8]) -> Result<(usize, Decimal)> {
        let bytes: [u8; DEC_KEY_LEN] = buf.try_into().map_err(|_| {
            Error::InvalidKey(format!(
                "decimal key needs {DEC_KEY_LEN} bytes, got {}",
                buf.len()
            ))
        })?;
        // Canonical flag layout: bytes 0-1 zero, scale in byte 2, sign bit
        // alone in byte 3.
        if bytes[0] != 0 || bytes[1] != 0 || bytes[2] > MAX_DEC_SCALE || (bytes[3] & 0x7f) != 0 {
            return Err(Error::InvalidKey(
                "decimal key has non-canonical flag bytes".to_string(),
            ));
        }
        Ok((DEC_KEY_LEN, Decimal::deserialize(bytes)))
    }

    fn stringify(&self, key: &Decimal) -> String {
        key.to_string()
    }

    fn type_name(&self) -> String {
        "decimal".to_string()
    }
}

/// Key encoder for `()` — the fixed empty key behind `Item` and `Sequence`.
///
/// Encodes to nothing and consumes nothing; the collection's single cell
/// lives at the bare namespace byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitKey;

impl KeyEncoder for UnitKey {
    type Key = ();

    fn encode(&self, _key: &()) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn decode(&self, _buf: &[u8]) -> Result<(usize, ())> {
        Ok((0, ()))
    }

    fn stringify(&self, _key: &()) -> String {
        "()".to_string()
    }

    fn type_name(&self) -> String {
        "unit".to_string()
    }
}
