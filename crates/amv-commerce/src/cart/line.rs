//! Cart line items.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::money::Money;

/// One product + size + color entry in the cart.
///
/// Display fields are copied from the product at add time so the cart can
/// be rendered without a catalog lookup. Lines are identified by
/// `(product_id, size, color)`: distinct size/color combinations of the
/// same product are distinct lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product identifier.
    #[serde(rename = "id")]
    pub product_id: u32,
    /// Product name, copied for display.
    pub name: String,
    /// Category, copied for display.
    pub category: String,
    /// Selected size.
    pub size: String,
    /// Selected color.
    pub color: String,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// Unit price charged for this line.
    pub price: Money,
    /// Base price before discount, kept for savings display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Discount percentage carried from the product.
    #[serde(default)]
    pub discount: u8,
    /// Image URI, copied for display.
    #[serde(default)]
    pub image: String,
}

/// The identity key of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub product_id: u32,
    pub size: String,
    pub color: String,
}

impl CartLine {
    /// Build a line from a product and a size/color selection.
    ///
    /// The unit price is the product's final (discounted) price; the base
    /// price is recorded when a discount applies so the savings can be
    /// shown.
    pub fn from_product(
        product: &Product,
        size: impl Into<String>,
        color: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            size: size.into(),
            color: color.into(),
            quantity,
            price: product.final_price,
            original_price: product.is_on_sale().then_some(product.price),
            discount: product.discount,
            image: product.image.clone(),
        }
    }

    /// This line's identity key.
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id,
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }

    /// Check identity against a key's parts without allocating.
    pub fn matches(&self, product_id: u32, size: &str, color: &str) -> bool {
        self.product_id == product_id && self.size == size && self.color == color
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }

    /// Savings versus the base price, zero when not discounted.
    pub fn line_savings(&self) -> Money {
        match self.original_price {
            Some(original) if self.discount > 0 => (original - self.price) * self.quantity,
            _ => Money::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 3,
            name: "Court Vision Elite".to_string(),
            category: "Basketball".to_string(),
            price: Money::new(1_450_000),
            discount: 20,
            final_price: Money::new(1_160_000),
            stock: 18,
            sizes: vec!["42".to_string(), "43".to_string()],
            colors: vec!["White".to_string(), "Red".to_string()],
            rating: 4.7,
            reviews: 156,
            description: "High-top court shoe.".to_string(),
            features: vec![],
            image: "/images/products/court-vision-elite.jpg".to_string(),
        }
    }

    #[test]
    fn from_product_copies_display_fields() {
        let line = CartLine::from_product(&product(), "42", "White", 2);
        assert_eq!(line.product_id, 3);
        assert_eq!(line.name, "Court Vision Elite");
        assert_eq!(line.price, Money::new(1_160_000));
        assert_eq!(line.original_price, Some(Money::new(1_450_000)));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn from_product_omits_original_price_without_discount() {
        let mut full_price = product();
        full_price.discount = 0;
        full_price.final_price = full_price.price;

        let line = CartLine::from_product(&full_price, "42", "White", 1);
        assert_eq!(line.original_price, None);
        assert_eq!(line.line_savings(), Money::ZERO);
    }

    #[test]
    fn key_distinguishes_size_and_color() {
        let a = CartLine::from_product(&product(), "42", "White", 1);
        let b = CartLine::from_product(&product(), "43", "White", 1);
        let c = CartLine::from_product(&product(), "42", "Red", 1);

        assert_ne!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
        assert!(a.matches(3, "42", "White"));
        assert!(!a.matches(3, "43", "White"));
    }

    #[test]
    fn line_totals() {
        let line = CartLine::from_product(&product(), "42", "White", 2);
        assert_eq!(line.line_total(), Money::new(2_320_000));
        assert_eq!(line.line_savings(), Money::new(580_000));
    }

    #[test]
    fn snapshot_shape_is_flat_camel_case() {
        let line = CartLine::from_product(&product(), "42", "White", 1);
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"id\":3"));
        assert!(json.contains("\"originalPrice\":1450000"));
        assert!(json.contains("\"price\":1160000"));

        let back: CartLine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
