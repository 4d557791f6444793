//! Catalog providers.
//!
//! The storefront reads products through the [`CatalogProvider`] trait so
//! the data source can be swapped: the bundled dataset, a simulated slow
//! fetch, or a provider that degrades to the bundled dataset on failure.

use std::time::Duration;

use tracing::warn;

use crate::catalog::Product;
use crate::error::CommerceError;

/// Bundled demo dataset, compiled into the crate.
const BUNDLED_CATALOG: &str = include_str!("products.json");

/// A read-only source of product records.
///
/// Implementations supply `products`; the lookup methods have default
/// implementations over the full list. Providers that can fail should
/// return [`CommerceError::CatalogUnavailable`].
pub trait CatalogProvider {
    /// All products, in catalog order.
    fn products(&self) -> Result<Vec<Product>, CommerceError>;

    /// Look up a single product by id.
    fn product_by_id(&self, id: u32) -> Result<Option<Product>, CommerceError> {
        Ok(self.products()?.into_iter().find(|p| p.id == id))
    }

    /// Products in a category. The category `"all"` (any case) matches
    /// everything; otherwise the category name must match exactly.
    fn products_by_category(&self, category: &str) -> Result<Vec<Product>, CommerceError> {
        let products = self.products()?;
        if category.eq_ignore_ascii_case("all") {
            return Ok(products);
        }
        Ok(products
            .into_iter()
            .filter(|p| p.category == category)
            .collect())
    }
}

/// A fixed, in-memory catalog.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Create a catalog over an explicit product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The bundled demo dataset.
    pub fn bundled() -> Self {
        serde_json::from_str(BUNDLED_CATALOG)
            .map(Self::new)
            .expect("bundled catalog is valid JSON")
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl CatalogProvider for StaticCatalog {
    fn products(&self) -> Result<Vec<Product>, CommerceError> {
        Ok(self.products.clone())
    }
}

/// Wraps a provider with a fixed fetch latency.
///
/// Stands in for the remote catalog the storefront would otherwise call;
/// every fetch blocks for the configured duration before delegating.
#[derive(Debug, Clone)]
pub struct DelayedCatalog<P> {
    inner: P,
    latency: Duration,
}

impl<P> DelayedCatalog<P> {
    /// Wrap a provider with the given latency.
    pub fn new(inner: P, latency: Duration) -> Self {
        Self { inner, latency }
    }
}

impl<P: CatalogProvider> CatalogProvider for DelayedCatalog<P> {
    fn products(&self) -> Result<Vec<Product>, CommerceError> {
        std::thread::sleep(self.latency);
        self.inner.products()
    }
}

/// Wraps a provider and degrades to the bundled dataset when it fails.
///
/// A catalog fetch failure never propagates to the caller; browsing keeps
/// working against local data.
#[derive(Debug, Clone)]
pub struct FallbackCatalog<P> {
    inner: P,
}

impl<P> FallbackCatalog<P> {
    /// Wrap a provider.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: CatalogProvider> CatalogProvider for FallbackCatalog<P> {
    fn products(&self) -> Result<Vec<Product>, CommerceError> {
        match self.inner.products() {
            Ok(products) => Ok(products),
            Err(err) => {
                warn!(error = %err, "catalog fetch failed, serving bundled dataset");
                StaticCatalog::bundled().products()
            }
        }
    }
}
