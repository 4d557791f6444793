//! Commerce error types.

use thiserror::Error;

use crate::checkout::ValidationErrors;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// The cart has no lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// The checkout form failed validation.
    #[error("Invalid checkout form: {0}")]
    InvalidForm(ValidationErrors),

    /// A catalog provider could not produce its products.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] amv_storage::StorageError),
}
