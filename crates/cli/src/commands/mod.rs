//! CLI subcommand implementations.

pub mod book;
pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use sqlx::PgPool;
use thiserror::Error;

/// Errors shared by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Repository error.
    #[error("Repository error: {0}")]
    Repository(#[from] doorstep_server::db::RepositoryError),

    /// Save request rejected before reaching the database.
    #[error("Invalid save request: {0}")]
    InvalidRequest(#[from] doorstep_server::db::addresses::MissingShippingAddress),
}

/// Connect to the address store database from `DOORSTEP_DATABASE_URL`.
pub async fn connect() -> Result<PgPool, CommandError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DOORSTEP_DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| CommandError::MissingEnvVar("DOORSTEP_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    Ok(doorstep_server::db::create_pool(&database_url).await?)
}
