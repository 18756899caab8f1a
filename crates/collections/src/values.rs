//! Built-in value encoders.
//!
//! Values are never scanned by range, so these layouts only need to be
//! bijective, not ordered. [`BincodeValue`] is the pluggable-format seam:
//! any `serde` type rides through it, and swapping the wire format means
//! swapping the encoder, not the collection.

use std::fmt::Debug;
use std::marker::PhantomData;

use keyspace_core::{AccountAddress, Error, Result};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{short_type_name, ValueEncoder};

/// Generic value encoder for any `serde` type, using bincode.
pub struct BincodeValue<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> BincodeValue<T> {
    /// Create the encoder. Zero-sized; exists only to pick `T`.
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Default for BincodeValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for BincodeValue<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BincodeValue<T> {}

impl<T> Debug for BincodeValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BincodeValue<{}>", short_type_name::<T>())
    }
}

impl<T> ValueEncoder for BincodeValue<T>
where
    T: Serialize + DeserializeOwned + Debug,
{
    type Value = T;

    fn encode(&self, value: &T) -> Result<Vec<u8>> {
        bincode::serialize(value)
            .map_err(|e| Error::InvalidValue(format!("bincode encode: {e}")))
    }

    fn decode(&self, buf: &[u8]) -> Result<T> {
        bincode::deserialize(buf)
            .map_err(|e| Error::InvalidValue(format!("bincode decode: {e}")))
    }

    fn stringify(&self, value: &T) -> String {
        format!("{value:?}")
    }

    fn type_name(&self) -> String {
        short_type_name::<T>()
    }
}

/// Value encoder for `u64`: fixed 8-byte big-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct U64Value;

impl ValueEncoder for U64Value {
    type Value = u64;

    fn encode(&self, value: &u64) -> Result<Vec<u8>> {
        Ok(value.to_be_bytes().to_vec())
    }

    fn decode(&self, buf: &[u8]) -> Result<u64> {
        let bytes: [u8; 8] = buf.try_into().map_err(|_| {
            Error::InvalidValue(format!("u64 value needs 8 bytes, got {}", buf.len()))
        })?;
        Ok(u64::from_be_bytes(bytes))
    }

    fn stringify(&self, value: &u64) -> String {
        value.to_string()
    }

    fn type_name(&self) -> String {
        "u64".to_string()
    }
}

/// Value encoder for `String`: the raw UTF-8 bytes, no framing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringValue;

impl ValueEncoder for StringValue {
    type Value = String;

    fn encode(&self, value: &String) -> Result<Vec<u8>> {
        Ok(value.as_bytes().to_vec())
    }

    fn decode(&self, buf: &[u8]) -> Result<String> {
        String::from_utf8(buf.to_vec())
            .map_err(|e| Error::InvalidValue(format!("string value is not valid UTF-8: {e}")))
    }

    fn stringify(&self, value: &String) -> String {
        value.clone()
    }

    fn type_name(&self) -> String {
        "string".to_string()
    }
}

/// Value encoder for `rust_decimal::Decimal`: canonical 16-byte binary form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecValue;

impl ValueEncoder for DecValue {
    type Value = Decimal;

    fn encode(&self, value: &Decimal) -> Result<Vec<u8>> {
        Ok(value.serialize().to_vec())
    }

    fn decode(&self, buf: &[u8]) -> Result<Decimal> {
        let bytes: [u8; 16] = buf.try_into().map_err(|_| {
            Error::InvalidValue(format!("decimal value needs 16 bytes, got {}", buf.len()))
        })?;
        Ok(Decimal::deserialize(bytes))
    }

    fn stringify(&self, value: &Decimal) -> String {
        value.to_string()
    }

    fn type_name(&self) -> String {
        "decimal".to_string()
    }
}

/// Value encoder for [`AccountAddress`]: the canonical string bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccAddressValue;

impl ValueEncoder for AccAddressValue {
    type Value = AccountAddress;

    fn encode(&self, value: &AccountAddress) -> Result<Vec<u8>> {
        Ok(value.to_string().into_bytes())
    }

    fn decode(&self, buf: &[u8]) -> Result<AccountAddress> {
        let s = std::str::from_utf8(buf)
            .map_err(|e| Error::InvalidValue(format!("address value is not valid UTF-8: {e}")))?;
        s.parse()
            .map_err(|e| Error::InvalidValue(format!("address value: {e}")))
    }

    fn stringify(&self, value: &AccountAddress) -> String {
        value.to_string()
    }

    fn type_name(&self) -> String {
        "account_address".to_string()
    }
}
