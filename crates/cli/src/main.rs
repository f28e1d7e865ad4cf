//! HVRDCR Market CLI - the storefront at your terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse catalogs, with optional filters
//! hvrdcr catalog cpu --kind server
//! hvrdcr catalog motherboard --socket AM4 --form-factor ATX
//! hvrdcr catalog ram --vendor Kingston
//!
//! # Manage the cart (persisted between invocations)
//! hvrdcr cart add --category cpu "Ryzen 5 5600X-AM4-0-false"
//! hvrdcr cart set-qty "Ryzen 5 5600X-AM4-0-false" 2
//! hvrdcr cart list
//!
//! # Sign in and place the order
//! hvrdcr login user@example.com
//! hvrdcr checkout
//! ```
//!
//! Catalog data comes from the configured spreadsheet; a completed checkout
//! sends the order notification through EmailJS. See `config.rs` in the
//! storefront crate for the environment variables.

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary is a terminal UI; stdout/stderr are its rendering surface.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, Subcommand};

use hvrdcr_market_storefront::config::MarketConfig;
use hvrdcr_market_storefront::error::Result;
use hvrdcr_market_storefront::state::AppState;

mod commands;

use commands::{CartAction, CatalogView};

#[derive(Parser)]
#[command(name = "hvrdcr")]
#[command(author, version, about = "HVRDCR Market - hardware catalog and checkout")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse a product catalog
    Catalog {
        #[command(subcommand)]
        view: CatalogView,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Sign in with an email address
    Login {
        /// Email address to sign in as
        email: String,
    },
    /// Register an account (and sign in)
    Register {
        /// Email address to register
        email: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in identity
    Whoami,
    /// Place the order: emails the cart contents and clears the cart
    Checkout,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = MarketConfig::from_env()?;
    let state = AppState::new(config);

    match cli.command {
        Commands::Catalog { view } => commands::catalog::show(&state, view).await?,
        Commands::Cart { action } => commands::cart::handle(&state, action).await?,
        Commands::Login { email } => commands::auth::login(&state, &email)?,
        Commands::Register { email } => commands::auth::register(&state, &email)?,
        Commands::Logout => commands::auth::logout(&state),
        Commands::Whoami => commands::auth::whoami(&state),
        Commands::Checkout => commands::checkout::place_order(&state).await?,
    }
    Ok(())
}
