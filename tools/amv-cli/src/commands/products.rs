//! Product listing command.

use anyhow::{bail, Result};

use amv_commerce::catalog::{category_counts, CatalogProvider, CatalogQuery, SortOption};
use amv_commerce::Money;

use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let Some(sort) = SortOption::from_str(&args.sort) else {
        bail!("unknown sort option: {}", args.sort);
    };

    let spinner = ctx.output.spinner("Loading products...");
    let products = ctx.catalog().products()?;
    spinner.finish_and_clear();

    let mut query = CatalogQuery::new().with_sort(sort).with_price_range(
        args.min_price.map(Money::new),
        args.max_price.map(Money::new),
    );
    if let Some(category) = args.category {
        query = query.with_category(category);
    }
    if let Some(search) = args.search {
        query = query.with_search(search);
    }

    let results = query.apply(&products);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    if results.is_empty() {
        ctx.output.info("No products match your filters.");
        return Ok(());
    }

    ctx.output.header(&format!(
        "Products ({}) - {}",
        results.len(),
        sort.display_name()
    ));

    const WIDTHS: &[usize] = &[4, 26, 12, 24, 8];
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "RATING"], WIDTHS);
    ctx.output.info(&"-".repeat(80));

    for product in &results {
        let price = if product.is_on_sale() {
            format!("{} (-{}%)", product.final_price, product.discount)
        } else {
            product.final_price.to_string()
        };
        let rating = format!("{:.1}", product.rating);

        ctx.output.table_row(
            &[
                &product.id.to_string(),
                &product.name,
                &product.category,
                &price,
                &rating,
            ],
            WIDTHS,
        );
    }

    ctx.output.info("");
    let counts: Vec<String> = category_counts(&products)
        .into_iter()
        .map(|(name, count)| format!("{name} ({count})"))
        .collect();
    ctx.output.kv("Categories", &counts.join(", "));

    Ok(())
}
