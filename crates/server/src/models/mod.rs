//! Domain model support types for the address store.

pub mod address;

pub use address::AddressRow;
