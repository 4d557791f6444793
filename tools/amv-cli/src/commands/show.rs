//! Product detail command.

use anyhow::Result;

use amv_commerce::catalog::CatalogProvider;
use amv_commerce::CommerceError;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{rating_stars, stock_badge};

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Loading product...");
    let product = ctx.catalog().product_by_id(args.id)?;
    spinner.finish_and_clear();

    let product = product.ok_or(CommerceError::ProductNotFound(args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("Category", &product.category);
    if product.is_on_sale() {
        ctx.output.kv(
            "Price",
            &format!(
                "{} (was {}, -{}%)",
                product.final_price, product.price, product.discount
            ),
        );
    } else {
        ctx.output.kv("Price", &product.final_price.to_string());
    }
    ctx.output.kv(
        "Rating",
        &format!(
            "{} {:.1} ({} reviews)",
            rating_stars(product.rating),
            product.rating,
            product.reviews
        ),
    );
    ctx.output.kv("Stock", &stock_badge(product.stock));
    ctx.output.kv("Sizes", &product.sizes.join(", "));
    ctx.output.kv("Colors", &product.colors.join(", "));

    ctx.output.info("");
    ctx.output.info(&product.description);

    if !product.features.is_empty() {
        ctx.output.info("");
        for feature in &product.features {
            ctx.output.list_item(feature);
        }
    }

    Ok(())
}
