//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! doorstep-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DOORSTEP_DATABASE_URL` - `PostgreSQL` connection string
//!
//! Migration files live in `crates/server/migrations/`. The server never
//! runs them on startup; this command is the only migration path.

use super::CommandError;

/// Run pending address store migrations.
///
/// # Errors
///
/// Returns an error if the environment is incomplete, the database is
/// unreachable, or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = super::connect().await?;

    tracing::info!("Running address store migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}
