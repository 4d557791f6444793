//! Checkout module.
//!
//! Contains the checkout form with field-level validation and the
//! simulated order placement.

mod form;
mod order;

pub use form::{CheckoutForm, FieldError, PaymentMethod, ValidationErrors};
pub use order::{Order, CONFIRMATION_DISPLAY_DELAY};
