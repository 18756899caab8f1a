//! Error types for keyspace
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! ## Error Policy
//!
//! `NotFound` is the only error expected during normal operation; callers
//! recover from it (or absorb it via `get_or`). `InvalidKey` and
//! `InvalidValue` indicate a malformed byte buffer at decode time — either
//! data corruption or the wrong codec bound to a namespace — and are treated
//! as hard failures of the operation, never skipped.

use thiserror::Error;

/// Result type alias for keyspace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for collection operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Lookup or delete on an absent key. Recoverable; expected in normal
    /// operation. Carries the collection's value type name and the
    /// stringified key for diagnostics.
    #[error("not found: '{type_name}' with key {key}")]
    NotFound {
        /// Declared type name of the collection's values
        type_name: String,
        /// Stringified form of the requested key
        key: String,
    },

    /// A key byte buffer could not be decoded (too short, missing
    /// terminator, unparsable domain value).
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// A value byte buffer could not be decoded.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl Error {
    /// Whether this error is a recoverable `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
