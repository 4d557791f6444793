//! AMV - Terminal storefront.
//!
//! Commands:
//! - `amv products` - Browse the catalog with filters and sorts
//! - `amv show` - Show one product in detail
//! - `amv cart` - Add, list, update, remove, clear
//! - `amv checkout` - Place a simulated order

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CartArgs, CheckoutArgs, ProductsArgs, ShowArgs};

/// AMV - browse products, manage your cart, and check out
#[derive(Parser)]
#[command(name = "amv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products(ProductsArgs),

    /// Show a single product in detail
    Show(ShowArgs),

    /// Manage the shopping cart
    Cart(CartArgs),

    /// Check out the cart as a simulated order
    Checkout(CheckoutArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config and open the cart store
    let config_path = cli.config.as_deref();
    let mut ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &mut ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &mut ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
