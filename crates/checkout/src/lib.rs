//! Doorstep Checkout - headless address-capture flow.
//!
//! This crate models the checkout address widgets without any rendering:
//! a UI shell (web, desktop, terminal) drives these types and draws the
//! result.
//!
//! # Modules
//!
//! - [`api`] - REST client for the address store service
//! - [`form`] - Billing/shipping capture form with per-country validation
//! - [`places`] - Place-autocomplete provider interface and HTTP client
//! - [`autocomplete`] - Stale-response guard for type-ahead queries
//! - [`session`] - Session-scoped saved-address book and selector state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod autocomplete;
pub mod form;
pub mod places;
pub mod session;

pub use api::{AddressApi, ApiError};
pub use autocomplete::Autocomplete;
pub use form::{AddressEntry, CaptureForm, EntryMode, SubmitErrors};
pub use places::{
    ExtractedAddress, HttpPlacesClient, PlaceDetail, PlaceSuggestion, PlacesError,
    SuggestionSource, extract_address,
};
pub use session::AddressSession;
