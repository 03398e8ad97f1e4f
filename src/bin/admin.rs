//! CLI administration tool for linkcache.
//!
//! Creates and resolves short links through the same resolution engine the
//! server uses, and checks backend connectivity, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Create a short link (prompts for the URL when omitted)
//! cargo run --bin admin -- link create https://example.com/a
//!
//! # Resolve a token
//! cargo run --bin admin -- link resolve aZ3kP9q
//!
//! # Check backends
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- cache check
//! ```
//!
//! Reads the same environment variables as the server (see `linkcache::config`).

use linkcache::application::services::ResolutionEngine;
use linkcache::config::{self, Config};
use linkcache::domain::errors::ResolveError;
use linkcache::infrastructure::cache::{CacheService, RedisCache};
use linkcache::server::{build_engine, connect_pool};

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;

/// CLI tool for managing linkcache.
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
    /// Create and resolve short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: CheckAction,
    },

    /// Cache operations
    Cache {
        #[command(subcommand)]
        action: CheckAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// Create a short link
    Create {
        /// Target URL (prompted for when omitted)
        url: Option<String>,
    },

    /// Resolve a token to its target URL
    Resolve {
        /// Short token
        token: String,
    },
}

#[derive(Subcommand)]
enum CheckAction {
    /// Check connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Link { action } => {
            let engine = engine(&config).await?;
            match action {
                LinkAction::Create { url } => create_link(&engine, &config, url).await?,
                LinkAction::Resolve { token } => resolve_link(&engine, &token).await?,
            }
        }
        Commands::Db {
            action: CheckAction::Check,
        } => check_db(&config).await?,
        Commands::Cache {
            action: CheckAction::Check,
        } => check_cache(&config).await,
    }

    Ok(())
}

async fn engine(config: &Config) -> Result<ResolutionEngine> {
    let pool = connect_pool(config).await?;
    Ok(build_engine(config, pool).await)
}

/// Creates a short link and prints the resulting URL.
async fn create_link(
    engine: &ResolutionEngine,
    config: &Config,
    url: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let target = match url {
        Some(u) => u,
        None => Input::new().with_prompt("Target URL").interact_text()?,
    };

    let token = engine
        .create(&target)
        .await
        .map_err(|e| anyhow!("Failed to create short link: {}", e))?;

    let short_url = format!("{}/{}", config.base_url.trim_end_matches('/'), token);

    println!("  Target:    {}", target.cyan());
    println!("  Token:     {}", token.bright_yellow().bold());
    println!("  Short URL: {}", short_url.green().bold());
    println!();

    Ok(())
}

/// Resolves a token and prints its target.
async fn resolve_link(engine: &ResolutionEngine, token: &str) -> Result<()> {
    match engine.resolve(token).await {
        Ok(target) => {
            println!("  {} → {}", token.bright_yellow(), target.cyan());
            Ok(())
        }
        Err(ResolveError::NotFound(_)) => {
            println!("{}", format!("❌ Token '{}' not found", token).red());
            Ok(())
        }
        Err(e) => Err(anyhow!("Lookup failed: {}", e)),
    }
}

/// Checks database connectivity and reports the record count.
async fn check_db(config: &Config) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());

    let engine = engine(config).await?;

    if !engine.store_healthy().await {
        println!("{}", "❌ Database is not answering queries".red().bold());
        return Ok(());
    }

    let count = engine
        .record_count()
        .await
        .map_err(|e| anyhow!("Failed to count records: {}", e))?;

    println!("{}", "✅ Database connection OK".green().bold());
    println!("  Short links: {}", count.to_string().bright_white().bold());

    Ok(())
}

/// Checks cache reachability.
async fn check_cache(config: &Config) {
    println!("{}", "🔍 Checking cache connection...".bright_blue());

    let Some(redis_url) = &config.redis_url else {
        println!("{}", "⚠️  Redis is not configured; caching disabled".yellow());
        return;
    };

    let cache = match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(cache) => cache,
        Err(e) => {
            println!("{}", format!("❌ Cache is unreachable: {}", e).red().bold());
            return;
        }
    };

    if cache.health_check().await {
        println!("{}", "✅ Cache connection OK".green().bold());
    } else {
        println!("{}", "❌ Cache is not answering PING".red().bold());
    }
}
