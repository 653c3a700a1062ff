//! Doorstep Core - Shared types library.
//!
//! This crate provides common types used across all Doorstep components:
//! - `server` - Address store REST service
//! - `checkout` - Headless address-capture flow embedded by UI shells
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types and validation rules - no I/O, no
//! database access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, address payloads/records, and wire DTOs
//! - [`countries`] - Per-country address formatting rules and the form validator

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod countries;
pub mod types;

pub use types::*;
