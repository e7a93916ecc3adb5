//! CLI administration tool for webcut.
//!
//! Provides commands for inspecting and removing short links, checking the
//! database and generating an admin token without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links, newest first
//! cargo run --bin admin -- links list
//!
//! # Delete a link (asks for confirmation unless --yes)
//! cargo run --bin admin -- links delete 42
//!
//! # Generate a value for ADMIN_TOKEN
//! cargo run --bin admin -- token generate
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required for `links` and `db`)
//! - `BASE_URL`, `LINK_PREFIX` for rendering short URLs

use webcut::config::Config;
use webcut::domain::repositories::LinkRepository;
use webcut::infrastructure::persistence::PgLinkRepository;
use webcut::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing webcut.
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
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Admin token helpers
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Delete a link by id
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Print a random token suitable for ADMIN_TOKEN
    Generate,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Commands::Token {
        action: TokenAction::Generate,
    } = cli.command
    {
        print_generated_token();
        return Ok(());
    }

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &config, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Token { .. } => {}
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, config: &Config, pool: &PgPool) -> Result<()> {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    match action {
        LinkAction::List => list_links(&repo, config).await?,
        LinkAction::Delete { id, yes } => delete_link(&repo, id, yes).await?,
    }

    Ok(())
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
/// Short links
///
///   ID    Short path                     Created            Destination
///   ---------------------------------------------------------------------------
///   2     go/my-slug                     2026-01-16 14:20   https://example.com/page
/// ```
async fn list_links(repo: &PgLinkRepository, config: &Config) -> Result<()> {
    println!("{}", "Short links".bright_blue().bold());
    println!();

    let links = repo
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<18} {}",
        "ID".bright_white().bold(),
        "Short path".bright_white().bold(),
        "Created".bright_white().bold(),
        "Destination".bright_white().bold()
    );
    println!("  {}", "-".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<5} {:<30} {:<18} {}",
            link.id.to_string().bright_black(),
            link.short_path().cyan(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.long_url
        );
    }

    println!();
    println!(
        "  Total: {}",
        links.len().to_string().bright_white().bold()
    );
    println!(
        "  Short URLs are served from {}",
        config.link_settings().base_url().bright_cyan()
    );
    println!();

    Ok(())
}

/// Deletes a link by id, asking for confirmation unless `skip_confirm`.
///
/// The short path becomes available for new links immediately.
async fn delete_link(repo: &PgLinkRepository, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete short link".bright_blue().bold());
    println!();

    let link = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("Link {id} not found"))?;

    println!("  Short path:  {}", link.short_path().cyan());
    println!("  Destination: {}", link.long_url);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    if deleted {
        println!("{}", "Link deleted".green().bold());
    } else {
        println!("{}", "Link was already gone".yellow());
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Links:      {}",
                links_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

fn print_generated_token() {
    let token = generate_token();

    println!("{}", "Generated admin token".bright_blue().bold());
    println!();
    println!("  {}", token.bright_yellow().bold());
    println!();
    println!("{}", "Add this to the service environment:".bright_white());
    println!("  ADMIN_TOKEN={}", token);
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/api/links",
        token
    );
    println!();
}

/// Generates a cryptographically random token.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
/// - Entropy: ~286 bits
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
