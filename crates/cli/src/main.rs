//! Lumen CLI - seeding and inspection tools for the shared document.
//!
//! # Usage
//!
//! ```bash
//! # Print the current remote document
//! lumen-cli document show
//!
//! # Replace the remote document with schema defaults
//! lumen-cli document seed --force
//!
//! # Drop the on-device cached document
//! lumen-cli cache clear
//! ```
//!
//! # Commands
//!
//! - `document show` - Fetch and pretty-print the remote document
//! - `document seed` - Overwrite the remote document with schema defaults
//! - `cache clear` - Remove the cached document from the data directory

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lumen-cli")]
#[command(author, version, about = "Lumen CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or seed the shared remote document
    Document {
        #[command(subcommand)]
        action: DocumentAction,
    },
    /// Manage the on-device cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum DocumentAction {
    /// Fetch and pretty-print the remote document
    Show,
    /// Replace the remote document with schema defaults
    Seed {
        /// Actually overwrite the remote document
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Remove the cached document from the data directory
    Clear,
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
        Commands::Document { action } => match action {
            DocumentAction::Show => commands::document::show().await?,
            DocumentAction::Seed { force } => commands::document::seed(force).await?,
        },
        Commands::Cache { action } => match action {
            CacheAction::Clear => commands::cache::clear()?,
        },
    }
    Ok(())
}
