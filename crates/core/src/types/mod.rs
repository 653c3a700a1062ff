//! Core types for Doorstep.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod id;

pub use address::{
    Address, AddressKind, AddressPayload, SaveAddressesRequest, SavedAddresses,
};
pub use id::*;
