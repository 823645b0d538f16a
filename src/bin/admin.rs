//! CLI administration tool for quote-service.
//!
//! Runs the quote list query against a seed file, shows the service catalog
//! and creates API tokens, all without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List approved quotes from a seed file, oldest first
//! cargo run --bin admin -- quotes list --seed data/quotes.seed.json --status approved --direction asc
//!
//! # Show the service catalog
//! cargo run --bin admin -- services
//!
//! # Create a new API token
//! cargo run --bin admin -- token create
//! ```
//!
//! # Environment Variables
//!
//! - `TOKEN_SIGNING_SECRET`: HMAC key used by `token create` (or pass `--secret`)
//! - `QUOTES_SEED_FILE`: default for `quotes list --seed`

use quote_service::application::projection::{ConfirmationPolicy, QuoteProjector};
use quote_service::application::queries::{
    GetQuoteListQuery, PaginationInput, QueryHandler, QuoteListFilterInput, SortingInput,
};
use quote_service::application::services::QuoteQueryService;
use quote_service::application::services::auth_service::hash_token;
use quote_service::domain::entities::ServiceType;
use quote_service::domain::repositories::QuoteSource;
use quote_service::infrastructure::persistence::{InMemoryQuoteRepository, load_seed_file};
use quote_service::utils::code_generator::{generate_api_token, generate_query_id};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing quote-service.
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
    /// Query quotes
    Quotes {
        #[command(subcommand)]
        action: QuotesAction,
    },

    /// Show the service catalog
    Services,

    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

/// Quote subcommands.
#[derive(Subcommand)]
enum QuotesAction {
    /// List one page of quotes from a seed file
    List {
        /// JSON seed file with an array of quotes
        #[arg(long, env = "QUOTES_SEED_FILE")]
        seed: PathBuf,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        priority: Option<String>,

        /// Service type key (e.g. "snow-ice-removal")
        #[arg(long)]
        service: Option<String>,

        /// Case-insensitive customer name fragment
        #[arg(long)]
        customer: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: u64,

        #[arg(long, default_value_t = 20)]
        limit: u32,

        /// submittedAt, updatedAt or customerName
        #[arg(long)]
        sort: Option<String>,

        /// asc or desc
        #[arg(long)]
        direction: Option<String>,

        /// Show stable confirmation numbers instead of per-read ones
        #[arg(long)]
        stored_confirmations: bool,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Generate a new API token and its hash
    Create {
        /// Signing secret (defaults to TOKEN_SIGNING_SECRET)
        #[arg(long, env = "TOKEN_SIGNING_SECRET", hide_env_values = true)]
        secret: String,

        /// Print only the hash, for scripting
        #[arg(long)]
        hash_only: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Quotes { action } => handle_quotes_action(action).await?,
        Commands::Services => list_services(),
        Commands::Token { action } => handle_token_action(action)?,
    }

    Ok(())
}

/// Dispatches quote commands.
async fn handle_quotes_action(action: QuotesAction) -> Result<()> {
    match action {
        QuotesAction::List {
            seed,
            status,
            priority,
            service,
            customer,
            page,
            limit,
            sort,
            direction,
            stored_confirmations,
        } => {
            let filters = QuoteListFilterInput {
                status: status.map(Value::String),
                priority: priority.map(Value::String),
                service_type: service.map(Value::String),
                customer_name: customer.map(Value::String),
                ..Default::default()
            };

            let query = GetQuoteListQuery::new(generate_query_id())
                .with_pagination(PaginationInput {
                    limit: Some(limit),
                    offset: None,
                    page: Some(page),
                })
                .with_sorting(SortingInput {
                    field: sort,
                    direction,
                })
                .with_filters(filters);

            let policy = if stored_confirmations {
                ConfirmationPolicy::Stored
            } else {
                ConfirmationPolicy::PerRead
            };

            list_quotes(seed, query, policy).await
        }
    }
}

/// Runs the quote list query over a seed file and prints a table.
///
/// # Output Format
///
/// ```text
/// 📋 Quotes
///
///   Confirmation             Customer                  Service              Status     Priority  Value
///   ────────────────────────────────────────────────────────────────────────────────────────────────────
///   QTE-LRE5S000-A1B2C3D4    ABC Corporation           Snow & Ice Removal   approved   high      12500.00
///
///   Page 1 of 1 (1 total)
/// ```
async fn list_quotes(
    seed: PathBuf,
    query: GetQuoteListQuery,
    policy: ConfirmationPolicy,
) -> Result<()> {
    let quotes = load_seed_file(&seed)?;
    let repository = Arc::new(InMemoryQuoteRepository::with_quotes(quotes));
    let service = QuoteQueryService::new(
        QuoteSource::filtered(repository),
        QuoteProjector::new(policy),
    );

    let result = service.handle(query).await;

    let data = match result.data {
        Some(data) if result.success => data,
        _ => anyhow::bail!(
            "{}",
            result
                .error_message
                .unwrap_or_else(|| "Quote query failed".to_string())
        ),
    };

    println!("{}", "📋 Quotes".bright_blue().bold());
    println!();

    if data.items.is_empty() {
        println!("{}", "  No quotes match".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<24} {:<25} {:<20} {:<10} {:<9} {}",
        "Confirmation".bright_white().bold(),
        "Customer".bright_white().bold(),
        "Service".bright_white().bold(),
        "Status".bright_white().bold(),
        "Priority".bright_white().bold(),
        "Value".bright_white().bold()
    );
    println!("  {}", "─".repeat(100).bright_black());

    for item in &data.items {
        let status = if item.is_expired {
            item.status.as_str().red()
        } else {
            item.status.as_str().green()
        };

        println!(
            "  {:<24} {:<25} {:<20} {:<10} {:<9} {}",
            item.confirmation_number.bright_black(),
            truncate(&item.customer_name, 25).cyan(),
            truncate(&item.service_type.name, 20),
            status,
            item.priority.as_str(),
            item.estimated_value.to_string().bright_white()
        );
    }

    println!();
    println!(
        "  Page {} of {} ({} total, {} ms)",
        data.page.to_string().bright_white().bold(),
        data.total_pages.to_string().bright_white().bold(),
        data.total,
        result.execution_time_ms
    );
    if data.has_next {
        println!(
            "  Next: {} --page {}",
            "admin quotes list".bright_cyan(),
            data.page + 1
        );
    }
    println!();

    Ok(())
}

/// Prints the known service types in catalog order.
fn list_services() {
    println!("{}", "🛠  Service Catalog".bright_blue().bold());
    println!();

    println!(
        "  {:<22} {:<26} {}",
        "Key".bright_white().bold(),
        "Name".bright_white().bold(),
        "Category".bright_white().bold()
    );
    println!("  {}", "─".repeat(64).bright_black());

    for service in ServiceType::catalog() {
        println!(
            "  {:<22} {:<26} {}",
            service.key.cyan(),
            service.name,
            service.category.bright_black()
        );
    }
    println!();
}

/// Dispatches token management commands.
fn handle_token_action(action: TokenAction) -> Result<()> {
    match action {
        TokenAction::Create { secret, hash_only } => create_token(&secret, hash_only),
    }
}

/// Generates a random API token and prints it with its hash.
///
/// # Security
///
/// - Only the hash belongs in `ADMIN_TOKEN_HASHES`
/// - Raw token is displayed once and cannot be recovered from the hash
fn create_token(secret: &str, hash_only: bool) -> Result<()> {
    if secret.is_empty() {
        anyhow::bail!("Signing secret must not be empty");
    }

    let token_value = generate_api_token();
    let token_hash = hash_token(secret, &token_value);

    if hash_only {
        println!("{token_hash}");
        return Ok(());
    }

    println!("{}", "🔑 Create API Token".bright_blue().bold());
    println!();
    println!("{}", "Token details:".bright_white().bold());
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!("  Hash:  {}", token_hash.cyan());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();
    println!("{}", "Add the hash to your environment:".bright_white());
    println!("  ADMIN_TOKEN_HASHES={}", token_hash);
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/api/quotes",
        token_value.bright_yellow()
    );
    println!();

    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
