//! Catalog browsing: in-memory filtering and sorting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::money::Money;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Featured ordering (highest rated first).
    #[default]
    Featured,
    /// Price, low to high.
    PriceLowHigh,
    /// Price, high to low.
    PriceHighLow,
    /// Name, A-Z.
    Name,
    /// Highest rated first.
    Rating,
    /// Biggest discount first.
    Discount,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceLowHigh => "price-low",
            SortOption::PriceHighLow => "price-high",
            SortOption::Name => "name",
            SortOption::Rating => "rating",
            SortOption::Discount => "discount",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceLowHigh => "Price: Low to High",
            SortOption::PriceHighLow => "Price: High to Low",
            SortOption::Name => "Name: A-Z",
            SortOption::Rating => "Highest Rated",
            SortOption::Discount => "Biggest Discount",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "featured" | "default" => Some(SortOption::Featured),
            "price-low" => Some(SortOption::PriceLowHigh),
            "price-high" => Some(SortOption::PriceHighLow),
            "name" => Some(SortOption::Name),
            "rating" => Some(SortOption::Rating),
            "discount" => Some(SortOption::Discount),
            _ => None,
        }
    }
}

/// A browse query over a product list.
///
/// Filters compose: category, final-price range, and a text search over
/// name, category, and description. Applied in memory against whatever
/// the provider returned.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Text search, case-insensitive.
    pub search: Option<String>,
    /// Category filter, case-insensitive. `None` matches every category.
    pub category: Option<String>,
    /// Minimum final price, inclusive.
    pub min_price: Option<Money>,
    /// Maximum final price, inclusive.
    pub max_price: Option<Money>,
    /// Sort order.
    pub sort: SortOption,
}

impl CatalogQuery {
    /// Create an empty query (no filters, featured ordering).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text search.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        if !search.is_empty() {
            self.search = Some(search);
        }
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the final-price range.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Apply the query, returning matching products in sorted order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut result: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        match self.sort {
            SortOption::Featured | SortOption::Rating => {
                result.sort_by(|a, b| b.rating.total_cmp(&a.rating));
            }
            SortOption::PriceLowHigh => {
                result.sort_by_key(|p| p.final_price);
            }
            SortOption::PriceHighLow => {
                result.sort_by_key(|p| std::cmp::Reverse(p.final_price));
            }
            SortOption::Name => {
                result.sort_by(|a, b| a.name.cmp(&b.name));
            }
            SortOption::Discount => {
                result.sort_by_key(|p| std::cmp::Reverse(p.discount));
            }
        }

        result
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(ref category) = self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if product.final_price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.final_price > max {
                return false;
            }
        }

        if let Some(ref search) = self.search {
            let query = search.to_lowercase();
            let haystacks = [&product.name, &product.category, &product.description];
            if !haystacks
                .iter()
                .any(|text| text.to_lowercase().contains(&query))
            {
                return false;
            }
        }

        true
    }
}

/// Count products per category, sorted by category name.
pub fn category_counts(products: &[Product]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for product in products {
        *counts.entry(product.category.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}
