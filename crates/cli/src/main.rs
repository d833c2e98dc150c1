//! Sugarloaf CLI - cart and catalog tools.
//!
//! # Usage
//!
//! ```bash
//! # Show the current cart
//! sugarloaf cart show
//!
//! # Add one unit of product 1
//! sugarloaf cart add 1
//!
//! # Set product 1 to exactly 3 units
//! sugarloaf cart set-amount 1 3
//!
//! # Remove product 1
//! sugarloaf cart remove 1
//!
//! # Inspect catalog stock
//! sugarloaf stock list
//! sugarloaf stock get 1
//! ```
//!
//! # Commands
//!
//! - `cart` - Inspect and mutate the persisted cart
//! - `stock` - Inspect catalog stock levels
//! - `product` - Show catalog details for a product

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use sugarloaf_core::ProductId;

mod commands;

#[derive(Parser)]
#[command(name = "sugarloaf")]
#[command(author, version, about = "Sugarloaf cart CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and mutate the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Inspect catalog stock levels
    Stock {
        #[command(subcommand)]
        action: StockAction,
    },
    /// Show catalog details for a product
    Product {
        /// Product id
        id: i32,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the current cart
    Show,
    /// Add one unit of a product
    Add {
        /// Product id
        id: i32,
    },
    /// Remove a product's line
    Remove {
        /// Product id
        id: i32,
    },
    /// Set a product's line to an absolute amount
    SetAmount {
        /// Product id
        id: i32,
        /// Desired quantity
        amount: i64,
    },
    /// Delete the persisted cart snapshot
    Clear,
}

#[derive(Subcommand)]
enum StockAction {
    /// List stock for every product
    List,
    /// Show stock for one product
    Get {
        /// Product id
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
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show()?,
            CartAction::Add { id } => commands::cart::add(ProductId::new(id)).await?,
            CartAction::Remove { id } => commands::cart::remove(ProductId::new(id))?,
            CartAction::SetAmount { id, amount } => {
                commands::cart::set_amount(ProductId::new(id), amount).await?;
            }
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Stock { action } => match action {
            StockAction::List => commands::stock::list().await?,
            StockAction::Get { id } => commands::stock::get(ProductId::new(id)).await?,
        },
        Commands::Product { id } => commands::stock::product(ProductId::new(id)).await?,
    }
    Ok(())
}
