//! Doorstep address store service library.
//!
//! This crate provides the address store service as a library,
//! allowing it to be tested and reused (the CLI links against it for
//! migrations and book management).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
