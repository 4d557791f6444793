//! Key-value persistence layer for the AMV storefront.
//!
//! Provides a simple, ergonomic API for durable key-value slots with
//! automatic JSON serialization. The storefront uses a single slot for its
//! persisted cart; backends are swappable so the cart core can be tested
//! against an in-memory store.
//!
//! # Example
//!
//! ```rust,ignore
//! use amv_storage::{JsonFileStore, KvStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct CartLine {
//!     quantity: u32,
//! }
//!
//! let mut store = JsonFileStore::open(".amv")?;
//!
//! // Store a value
//! store.set("amv_cart", &lines)?;
//!
//! // Retrieve a value
//! let lines: Option<Vec<CartLine>> = store.get("amv_cart")?;
//!
//! // Delete a value
//! store.delete("amv_cart")?;
//! ```

mod error;
mod kv;

pub use error::StorageError;
pub use kv::{JsonFileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{JsonFileStore, KvStore, MemoryStore, StorageError};
}
