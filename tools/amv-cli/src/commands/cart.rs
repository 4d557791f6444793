//! Cart management commands.

use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Confirm};

use amv_commerce::cart::CartTotals;
use amv_commerce::catalog::CatalogProvider;
use amv_commerce::CommerceError;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &mut Context) -> Result<()> {
    match args.command {
        CartCommand::Add {
            id,
            size,
            color,
            quantity,
        } => add(id, size, color, quantity, ctx),
        CartCommand::List => list(ctx),
        CartCommand::Update { id, quantity } => update(id, quantity, ctx),
        CartCommand::Remove { id } => remove(id, ctx),
        CartCommand::Clear { yes } => clear(yes, ctx),
    }
}

fn add(
    id: u32,
    size: Option<String>,
    color: Option<String>,
    quantity: Option<u32>,
    ctx: &mut Context,
) -> Result<()> {
    let spinner = ctx.output.spinner("Loading product...");
    let product = ctx.catalog().product_by_id(id)?;
    spinner.finish_and_clear();

    let product = product.ok_or(CommerceError::ProductNotFound(id))?;
    if !product.in_stock() {
        bail!("{} is out of stock", product.name);
    }

    // The store takes size/color as given; option validity is enforced here
    let size = match size {
        Some(size) if product.has_size(&size) => size,
        Some(size) => bail!(
            "{} is not an available size of {} (sizes: {})",
            size,
            product.name,
            product.sizes.join(", ")
        ),
        None => match product.sizes.first() {
            Some(first) => first.clone(),
            None => bail!("{} has no sizes to choose from", product.name),
        },
    };
    let color = match color {
        Some(color) if product.has_color(&color) => color,
        Some(color) => bail!(
            "{} is not an available color of {} (colors: {})",
            color,
            product.name,
            product.colors.join(", ")
        ),
        None => match product.colors.first() {
            Some(first) => first.clone(),
            None => bail!("{} has no colors to choose from", product.name),
        },
    };

    ctx.cart.add_to_cart(&product, &size, &color, quantity);

    ctx.output.success(&format!(
        "Added {} ({} / {}) to cart - {} item(s) total",
        product.name,
        size,
        color,
        ctx.cart.cart_count()
    ));
    Ok(())
}

fn list(ctx: &Context) -> Result<()> {
    let lines = ctx.cart.lines();

    if ctx.output.is_json() {
        #[derive(serde::Serialize)]
        struct CartView<'a> {
            lines: &'a [amv_commerce::cart::CartLine],
            totals: CartTotals,
        }
        ctx.output.json(&CartView {
            lines,
            totals: CartTotals::compute(lines),
        });
        return Ok(());
    }

    if lines.is_empty() {
        ctx.output.info("Your cart is empty.");
        ctx.output.info("Browse products with `amv products`.");
        return Ok(());
    }

    ctx.output
        .header(&format!("Cart ({} items)", ctx.cart.cart_count()));

    const WIDTHS: &[usize] = &[4, 26, 14, 4, 14];
    ctx.output
        .table_row(&["ID", "NAME", "SIZE / COLOR", "QTY", "TOTAL"], WIDTHS);
    ctx.output.info(&"-".repeat(70));

    for line in lines {
        ctx.output.table_row(
            &[
                &line.product_id.to_string(),
                &line.name,
                &format!("{} / {}", line.size, line.color),
                &line.quantity.to_string(),
                &line.line_total().to_string(),
            ],
            WIDTHS,
        );
    }

    let totals = CartTotals::compute(lines);
    ctx.output.info("");
    ctx.output.kv("Subtotal", &totals.subtotal.to_string());
    if totals.has_savings() {
        ctx.output
            .kv("You save", &format!("-{}", totals.discount_total));
    }
    if totals.qualifies_for_free_shipping() {
        ctx.output.kv("Shipping", "FREE");
    } else {
        ctx.output.kv("Shipping", &totals.shipping_cost.to_string());
        ctx.output.info(&format!(
            "  Spend {} more for free shipping",
            totals.free_shipping_remaining
        ));
    }
    ctx.output.kv("Total", &totals.total.to_string());

    Ok(())
}

fn update(id: u32, quantity: u32, ctx: &mut Context) -> Result<()> {
    if !ctx.cart.lines().iter().any(|l| l.product_id == id) {
        bail!("product {} is not in the cart", id);
    }

    // Matches every size/color line of the product
    ctx.cart.update_quantity(id, quantity);
    ctx.output.success(&format!(
        "Updated product {} - {} item(s) in cart",
        id,
        ctx.cart.cart_count()
    ));
    Ok(())
}

fn remove(id: u32, ctx: &mut Context) -> Result<()> {
    if !ctx.cart.lines().iter().any(|l| l.product_id == id) {
        bail!("product {} is not in the cart", id);
    }

    ctx.cart.remove_from_cart(id);
    ctx.output.success(&format!(
        "Removed product {} - {} item(s) in cart",
        id,
        ctx.cart.cart_count()
    ));
    Ok(())
}

fn clear(yes: bool, ctx: &mut Context) -> Result<()> {
    if ctx.cart.is_empty() {
        ctx.output.info("Your cart is already empty.");
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Remove all {} item(s) from your cart?",
                ctx.cart.cart_count()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Cart left unchanged.");
            return Ok(());
        }
    }

    ctx.cart.clear_cart();
    ctx.output.success("Cart cleared.");
    Ok(())
}
