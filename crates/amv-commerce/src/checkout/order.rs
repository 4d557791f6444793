//! Simulated order placement.

use std::time::Duration;

use serde::Serialize;

use crate::cart::{CartLine, CartTotals};
use crate::checkout::CheckoutForm;
use crate::error::CommerceError;

/// How long the confirmation stays on screen before the cart is cleared.
pub const CONFIRMATION_DISPLAY_DELAY: Duration = Duration::from_secs(3);

/// A locally placed order.
///
/// Nothing leaves the machine: the order is a snapshot of the cart and
/// form at placement time, identified by a timestamp-derived number that
/// is neither globally unique nor persisted beyond the session.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Order {
    /// Order number, e.g. "AMV48213907".
    pub number: String,
    /// Unix timestamp of placement, in seconds.
    pub placed_at: i64,
    /// Customer details as submitted.
    pub customer: CheckoutForm,
    /// Line items at placement time.
    pub lines: Vec<CartLine>,
    /// Pricing breakdown at placement time.
    pub totals: CartTotals,
}

impl Order {
    /// Validate the form and place an order over the given lines.
    ///
    /// Fails on an empty cart or an invalid form; the caller clears the
    /// cart afterwards, once the confirmation has been shown.
    pub fn place(form: &CheckoutForm, lines: &[CartLine]) -> Result<Order, CommerceError> {
        if lines.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        form.validate().map_err(CommerceError::InvalidForm)?;

        Ok(Order {
            number: generate_order_number(),
            placed_at: current_timestamp(),
            customer: form.clone(),
            lines: lines.to_vec(),
            totals: CartTotals::compute(lines),
        })
    }

    /// Total item count across the order's lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// Generate an order number from the millisecond clock: "AMV" followed by
/// the last eight digits.
pub fn generate_order_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("AMV{:08}", millis % 100_000_000)
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
