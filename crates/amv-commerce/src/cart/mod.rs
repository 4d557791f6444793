//! Shopping cart module.
//!
//! Contains the cart line type, the persisted cart store, and the pure
//! pricing calculations.

mod line;
mod pricing;
mod store;

pub use line::{CartLine, LineKey};
pub use pricing::{
    discount_total, free_shipping_remaining, shipping_cost, subtotal, CartTotals,
    FLAT_SHIPPING_RATE, FREE_SHIPPING_THRESHOLD,
};
pub use store::{CartStore, CART_STORAGE_KEY};
