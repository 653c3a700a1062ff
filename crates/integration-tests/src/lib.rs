//! Integration tests for Doorstep.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! docker compose up -d db
//! cargo run -p doorstep-cli -- migrate
//!
//! # Start the server
//! cargo run -p doorstep-server
//!
//! # Run integration tests (they are #[ignore]d otherwise)
//! cargo test -p doorstep-integration-tests -- --ignored
//! ```
//!
//! # Configuration
//!
//! - `DOORSTEP_BASE_URL` - Address store base URL (default: `http://localhost:3000`)

/// Base URL for the address store API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("DOORSTEP_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
