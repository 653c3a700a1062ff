//! HTTP route handlers for the address store.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health               - Liveness check
//! GET    /health/ready         - Readiness check (verifies database)
//!
//! # Addresses
//! POST   /addresses            - Save billing/shipping addresses
//! GET    /addresses            - List all saved addresses
//! DELETE /addresses/{id}       - Delete an address by id
//! ```

pub mod addresses;

use axum::{
    Router,
    routing::{delete, post},
};

use crate::state::AppState;

/// Create the address routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/addresses", post(addresses::save).get(addresses::list))
        .route("/addresses/{id}", delete(addresses::delete))
}
