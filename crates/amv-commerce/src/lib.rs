//! Storefront domain logic for AMV.
//!
//! This crate provides the core of a client-side storefront:
//!
//! - **Catalog**: product records, browse filters/sorts, pluggable providers
//! - **Cart**: a persisted cart store with line-item merge semantics
//! - **Pricing**: pure subtotal/discount/shipping/total calculations
//! - **Checkout**: form validation and simulated order placement
//!
//! # Example
//!
//! ```rust,ignore
//! use amv_commerce::prelude::*;
//! use amv_storage::MemoryStore;
//!
//! let catalog = StaticCatalog::bundled();
//! let product = catalog.product_by_id(1)?.unwrap();
//!
//! // Open a cart backed by any key-value slot
//! let mut cart = CartStore::open(MemoryStore::new());
//! cart.add_to_cart(&product, "42", "Black", Some(2));
//!
//! // Totals are recomputed from the line items on demand
//! let totals = CartTotals::compute(cart.lines());
//! println!("Total: {}", totals.total);
//! ```

pub mod error;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        CatalogProvider, CatalogQuery, DelayedCatalog, FallbackCatalog, Product, SortOption,
        StaticCatalog,
    };

    // Cart
    pub use crate::cart::{
        CartLine, CartStore, CartTotals, LineKey, FLAT_SHIPPING_RATE, FREE_SHIPPING_THRESHOLD,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutForm, Order, PaymentMethod, ValidationErrors, CONFIRMATION_DISPLAY_DELAY,
    };
}
