//! Doorstep CLI - Database migrations and address book management.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! doorstep-cli migrate
//!
//! # Seed demo addresses for local development
//! doorstep-cli seed
//!
//! # Inspect the address book
//! doorstep-cli list
//!
//! # Delete an address by id
//! doorstep-cli delete 3
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "doorstep-cli")]
#[command(author, version, about = "Doorstep CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed demo addresses for local development
    Seed,
    /// List all saved addresses
    List,
    /// Delete an address by id
    Delete {
        /// Address id to delete
        id: i32,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::List => commands::book::list().await?,
        Commands::Delete { id } => commands::book::delete(id).await?,
    }
    Ok(())
}
