//! Product record.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A product in the catalog.
///
/// Immutable from the storefront's point of view: the provider supplies
/// complete records, `finalPrice` already has the percentage discount
/// applied. Field names in JSON are camelCase to match the dataset and
/// the persisted cart snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: u32,
    /// Product name.
    pub name: String,
    /// Category name (e.g. "Running").
    pub category: String,
    /// Base unit price before discount.
    pub price: Money,
    /// Discount percentage, 0-100.
    pub discount: u8,
    /// Price after discount, precomputed by the provider.
    pub final_price: Money,
    /// Units in stock.
    pub stock: u32,
    /// Available sizes, in display order.
    pub sizes: Vec<String>,
    /// Available colors, in display order.
    pub colors: Vec<String>,
    /// Average rating, 0.0-5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Full description.
    pub description: String,
    /// Selling points for the detail view.
    #[serde(default)]
    pub features: Vec<String>,
    /// Image URI.
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Check if the product has a discount applied.
    pub fn is_on_sale(&self) -> bool {
        self.discount > 0
    }

    /// Check if the product can be purchased.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Amount saved per unit when on sale.
    pub fn savings(&self) -> Money {
        if self.is_on_sale() {
            self.price - self.final_price
        } else {
            Money::ZERO
        }
    }

    /// Check if a size is one of this product's options.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check if a color is one of this product's options.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}
