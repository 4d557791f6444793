//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod products;
pub mod show;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Filter by category.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Search in name, category, and description.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Minimum final price.
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Maximum final price.
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Sort order: featured, price-low, price-high, name, rating, discount.
    #[arg(long, default_value = "featured")]
    pub sort: String,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: u32,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Add a product to the cart.
    Add {
        /// Product id.
        id: u32,

        /// Size (defaults to the product's first size).
        #[arg(short, long)]
        size: Option<String>,

        /// Color (defaults to the product's first color).
        #[arg(short, long)]
        color: Option<String>,

        /// Quantity (defaults to 1).
        #[arg(short, long)]
        quantity: Option<u32>,
    },
    /// List cart contents with totals.
    List,
    /// Set the quantity for every line of a product.
    Update {
        /// Product id.
        id: u32,
        /// New quantity (minimum 1).
        quantity: u32,
    },
    /// Remove every line of a product.
    Remove {
        /// Product id.
        id: u32,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
///
/// Interactive by default; pass every field flag for a non-interactive
/// run.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Customer full name.
    #[arg(long)]
    pub full_name: Option<String>,

    /// Contact email.
    #[arg(long)]
    pub email: Option<String>,

    /// Contact phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Shipping street address.
    #[arg(long)]
    pub address: Option<String>,

    /// Shipping city.
    #[arg(long)]
    pub city: Option<String>,

    /// Payment method: cod, transfer, ewallet.
    #[arg(long, default_value = "cod")]
    pub payment: String,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

impl CheckoutArgs {
    /// True when every form field was supplied via flags.
    pub fn is_non_interactive(&self) -> bool {
        self.full_name.is_some()
            && self.email.is_some()
            && self.phone.is_some()
            && self.address.is_some()
            && self.city.is_some()
    }
}
