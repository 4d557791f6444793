//! Checkout command.

use anyhow::{bail, Result};
use chrono::DateTime;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use amv_commerce::cart::CartTotals;
use amv_commerce::checkout::{CheckoutForm, Order, PaymentMethod, CONFIRMATION_DISPLAY_DELAY};

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &mut Context) -> Result<()> {
    if ctx.cart.is_empty() {
        bail!("your cart is empty - add products before checking out");
    }

    let Some(payment_method) = PaymentMethod::from_str(&args.payment) else {
        bail!("unknown payment method: {}", args.payment);
    };
    let skip_confirm = args.yes;

    let totals = CartTotals::compute(ctx.cart.lines());
    ctx.output
        .header(&format!("Checkout ({} items)", ctx.cart.cart_count()));
    for line in ctx.cart.lines() {
        ctx.output.list_item(&format!(
            "{} ({} / {}) x{} - {}",
            line.name,
            line.size,
            line.color,
            line.quantity,
            line.line_total()
        ));
    }
    ctx.output.kv("Total", &totals.total.to_string());

    let form = if args.is_non_interactive() {
        let form = CheckoutForm {
            full_name: args.full_name.unwrap_or_default(),
            email: args.email.unwrap_or_default(),
            phone: args.phone.unwrap_or_default(),
            address: args.address.unwrap_or_default(),
            city: args.city.unwrap_or_default(),
            payment_method,
        };
        form.validate()
            .map_err(amv_commerce::CommerceError::InvalidForm)?;
        form
    } else {
        prompt_form(args, payment_method, ctx)?
    };

    if !skip_confirm {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Place order for {}?", totals.total))
            .default(true)
            .interact()?;
        if !confirmed {
            ctx.output.info("Checkout cancelled.");
            return Ok(());
        }
    }

    let order = Order::place(&form, ctx.cart.lines())?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
    } else {
        print_confirmation(&order, ctx);
    }

    // The confirmation stays on screen briefly, then the cart is cleared
    let spinner = ctx.output.spinner("Finalizing order...");
    std::thread::sleep(CONFIRMATION_DISPLAY_DELAY);
    spinner.finish_and_clear();

    ctx.cart.clear_cart();
    ctx.output.success("Cart cleared. Thank you for shopping!");

    Ok(())
}

/// Collect the form interactively, re-prompting until validation passes.
fn prompt_form(
    args: CheckoutArgs,
    payment_method: PaymentMethod,
    ctx: &Context,
) -> Result<CheckoutForm> {
    let theme = ColorfulTheme::default();
    let mut form = CheckoutForm {
        full_name: args.full_name.unwrap_or_default(),
        email: args.email.unwrap_or_default(),
        phone: args.phone.unwrap_or_default(),
        address: args.address.unwrap_or_default(),
        city: args.city.unwrap_or_default(),
        payment_method,
    };

    loop {
        form.full_name = Input::with_theme(&theme)
            .with_prompt("Full name")
            .with_initial_text(form.full_name.clone())
            .allow_empty(true)
            .interact_text()?;
        form.email = Input::with_theme(&theme)
            .with_prompt("Email")
            .with_initial_text(form.email.clone())
            .allow_empty(true)
            .interact_text()?;
        form.phone = Input::with_theme(&theme)
            .with_prompt("Phone")
            .with_initial_text(form.phone.clone())
            .allow_empty(true)
            .interact_text()?;
        form.address = Input::with_theme(&theme)
            .with_prompt("Address")
            .with_initial_text(form.address.clone())
            .allow_empty(true)
            .interact_text()?;
        form.city = Input::with_theme(&theme)
            .with_prompt("City")
            .with_initial_text(form.city.clone())
            .allow_empty(true)
            .interact_text()?;

        let methods = PaymentMethod::all();
        let labels: Vec<&str> = methods.iter().map(|m| m.display_name()).collect();
        let default = methods
            .iter()
            .position(|m| *m == form.payment_method)
            .unwrap_or(0);
        let selected = Select::with_theme(&theme)
            .with_prompt("Payment method")
            .items(&labels)
            .default(default)
            .interact()?;
        form.payment_method = methods[selected];

        match form.validate() {
            Ok(()) => return Ok(form),
            Err(errors) => {
                for error in errors.iter() {
                    ctx.output.error(error.message);
                }
            }
        }
    }
}

fn print_confirmation(order: &Order, ctx: &Context) {
    ctx.output.header("Order placed!");
    ctx.output.kv("Order number", &order.number);
    if let Some(placed) = DateTime::from_timestamp(order.placed_at, 0) {
        ctx.output
            .kv("Placed at", &placed.format("%d %b %Y %H:%M UTC").to_string());
    }
    ctx.output.kv("Name", &order.customer.full_name);
    ctx.output.kv("Email", &order.customer.email);
    ctx.output.kv("Phone", &order.customer.phone);
    ctx.output.kv(
        "Ship to",
        &format!("{}, {}", order.customer.address, order.customer.city),
    );
    ctx.output
        .kv("Payment", order.customer.payment_method.display_name());

    ctx.output.info("");
    for line in &order.lines {
        ctx.output.list_item(&format!(
            "{} x{} - {}",
            line.name,
            line.quantity,
            line.line_total()
        ));
    }
    ctx.output.kv("Subtotal", &order.totals.subtotal.to_string());
    if order.totals.has_savings() {
        ctx.output
            .kv("You save", &format!("-{}", order.totals.discount_total));
    }
    if order.totals.qualifies_for_free_shipping() {
        ctx.output.kv("Shipping", "FREE");
    } else {
        ctx.output
            .kv("Shipping", &order.totals.shipping_cost.to_string());
    }
    ctx.output.kv("Total", &order.totals.total.to_string());
}
