//! Core types and traits for keyspace
//!
//! This crate defines the foundational layer the collections crate builds on:
//! - Error: Error type hierarchy shared by every collection operation
//! - Store: The minimal ordered byte-store interface consumed by the
//!   indexing layer (get/set/delete/has/iterate)
//! - MemStore: A `BTreeMap`-backed reference store with read-your-writes,
//!   used by tests and usable as an embedded context
//! - AccountAddress / ValidatorAddress: Address domain types with a
//!   canonical, round-trippable textual form

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod error;
pub mod mem;
pub mod store;

// Re-export commonly used types and traits
pub use address::{AccountAddress, AddressError, ValidatorAddress};
pub use error::{Error, Result};
pub use mem::MemStore;
pub use store::{RawEntry, Store};
