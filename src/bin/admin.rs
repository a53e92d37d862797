//! CLI administration tool for jclip.
//!
//! Inspects stored links and checks database connectivity without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show a stored link
//! cargo run --bin admin -- link show V1StGXR
//!
//! # Count stored links
//! cargo run --bin admin -- link count
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL`, `DB_URL` or the
//! `DB_*` components) plus `BASE_URL` for printing short URLs.

use jclip::application::services::LinkService;
use jclip::config::{Config, mask_connection_string};
use jclip::error::AppError;
use jclip::infrastructure::database::check_connectivity;
use jclip::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing jclip.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect stored links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link inspection subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Show the original URL stored under a short code
    Show {
        /// Short code (the last path segment of a short URL)
        code: String,
    },

    /// Count stored links
    Count,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let pool = PgPool::connect(&config.database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&config.database_url)
            )
        })?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

/// Dispatches link inspection commands.
async fn handle_link_action(action: LinkAction, pool: PgPool, config: &Config) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(pool));
    let service = LinkService::new(repo, config.base_url.clone());

    match action {
        LinkAction::Show { code } => show_link(&service, &code).await?,
        LinkAction::Count => count_links(&service).await?,
    }

    Ok(())
}

/// Prints a single stored link.
async fn show_link(service: &LinkService<PgLinkRepository>, code: &str) -> Result<()> {
    let link = match service.resolve(code).await {
        Ok(link) => link,
        Err(AppError::NotFound) => {
            println!("{} {}", "Link not found:".red(), code.bright_white());
            std::process::exit(1);
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to look up link: {e}")),
    };

    println!("{}", "Link".bright_blue().bold());
    println!();
    println!("  Code:      {}", link.short_code.cyan());
    println!("  Short URL: {}", service.short_url(&link).bright_yellow());
    println!("  Target:    {}", link.original_url.bright_white());
    println!(
        "  Created:   {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Prints the number of stored links.
async fn count_links(service: &LinkService<PgLinkRepository>) -> Result<()> {
    let count = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {e}"))?;

    println!(
        "  Total links: {}",
        count.to_string().bright_white().bold()
    );

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            print!("Checking {} ... ", mask_connection_string(&config.database_url));

            match check_connectivity(pool).await {
                Ok(()) => println!("{}", "OK".green().bold()),
                Err(e) => {
                    println!("{}", "FAILED".red().bold());
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
