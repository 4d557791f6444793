//! Pure cart pricing calculations.
//!
//! Every function here is deterministic and side-effect-free, recomputed
//! from the line items on demand. Nothing is cached.

use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::money::Money;

/// Subtotal above which shipping is free. Strictly above: a subtotal of
/// exactly this amount still pays shipping.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::new(500_000);

/// Flat shipping rate charged below the free-shipping threshold.
pub const FLAT_SHIPPING_RATE: Money = Money::new(25_000);

/// Sum of price times quantity over all lines.
pub fn subtotal(lines: &[CartLine]) -> Money {
    lines.iter().map(CartLine::line_total).sum()
}

/// Total savings over lines that carry a discount and a base price.
pub fn discount_total(lines: &[CartLine]) -> Money {
    lines.iter().map(CartLine::line_savings).sum()
}

/// Shipping cost for a subtotal: free above the threshold, flat otherwise.
pub fn shipping_cost(subtotal: Money) -> Money {
    if subtotal > FREE_SHIPPING_THRESHOLD {
        Money::ZERO
    } else {
        FLAT_SHIPPING_RATE
    }
}

/// How much more spend is needed to reach free shipping, zero once there.
pub fn free_shipping_remaining(subtotal: Money) -> Money {
    FREE_SHIPPING_THRESHOLD.saturating_sub_floor(subtotal)
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Subtotal before discounts.
    pub subtotal: Money,
    /// Total discount amount.
    pub discount_total: Money,
    /// Shipping cost.
    pub shipping_cost: Money,
    /// Remaining spend to reach free shipping.
    pub free_shipping_remaining: Money,
    /// Grand total: subtotal - discounts + shipping.
    pub total: Money,
}

impl CartTotals {
    /// Compute the full breakdown for a line sequence.
    pub fn compute(lines: &[CartLine]) -> Self {
        let subtotal = subtotal(lines);
        let discount_total = discount_total(lines);
        let shipping_cost = shipping_cost(subtotal);
        Self {
            subtotal,
            discount_total,
            shipping_cost,
            free_shipping_remaining: free_shipping_remaining(subtotal),
            total: subtotal - discount_total + shipping_cost,
        }
    }

    /// Check if the cart qualifies for free shipping.
    pub fn qualifies_for_free_shipping(&self) -> bool {
        self.shipping_cost.is_zero()
    }

    /// Check if any savings apply.
    pub fn has_savings(&self) -> bool {
        self.discount_total.is_positive()
    }
}
