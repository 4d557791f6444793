//! End-to-end storefront journey: browse the bundled catalog, fill a
//! cart backed by file storage, check out, and verify the persisted
//! snapshot at every step.

use amv_commerce::prelude::*;
use amv_storage::{JsonFileStore, KvStore};

use amv_commerce::cart::CART_STORAGE_KEY;

fn open_store(dir: &std::path::Path) -> CartStore<JsonFileStore> {
    CartStore::open(JsonFileStore::open(dir).unwrap())
}

#[test]
fn browse_fill_checkout_clear() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = StaticCatalog::bundled();

    // Browse: pick the cheapest running shoe
    let products = catalog.products().unwrap();
    let running = CatalogQuery::new()
        .with_category("Running")
        .with_sort(SortOption::PriceLowHigh)
        .apply(&products);
    assert!(!running.is_empty());
    let runner = &running[0];

    let loafer = catalog.product_by_id(10).unwrap().unwrap();

    // Fill the cart: two size variants of the runner plus another product
    let mut cart = open_store(dir.path());
    cart.add_to_cart(runner, &runner.sizes[0], &runner.colors[0], Some(1));
    cart.add_to_cart(runner, &runner.sizes[1], &runner.colors[0], Some(1));
    cart.add_to_cart(&loafer, &loafer.sizes[0], &loafer.colors[0], Some(2));

    assert_eq!(cart.lines().len(), 3);
    assert_eq!(cart.cart_count(), 4);

    // A reload from the same directory restores the identical sequence
    let reloaded = open_store(dir.path());
    assert_eq!(reloaded.lines(), cart.lines());

    // Totals recompute from lines alone
    let totals = CartTotals::compute(cart.lines());
    let expected_subtotal = runner.final_price * 2 + loafer.final_price * 2;
    assert_eq!(totals.subtotal, expected_subtotal);
    assert!(totals.qualifies_for_free_shipping());

    // Checkout
    let form = CheckoutForm {
        full_name: "Dewi Lestari".to_string(),
        email: "dewi@example.com".to_string(),
        phone: "081234567890".to_string(),
        address: "Jl. Merdeka No. 17".to_string(),
        city: "Bandung".to_string(),
        payment_method: PaymentMethod::CashOnDelivery,
    };
    let order = Order::place(&form, cart.lines()).unwrap();
    assert!(order.number.starts_with("AMV"));
    assert_eq!(order.item_count(), 4);
    assert_eq!(order.totals, totals);

    // The view clears the cart after showing the confirmation
    cart.clear_cart();
    assert!(cart.is_empty());

    let raw = cart.storage().get_raw(CART_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(raw, b"[]");

    // A fresh session starts empty again
    let fresh = open_store(dir.path());
    assert!(fresh.is_empty());
}

#[test]
fn corrupt_snapshot_degrades_to_empty_cart() {
    let dir = tempfile::tempdir().unwrap();

    let mut storage = JsonFileStore::open(dir.path()).unwrap();
    storage
        .set_raw(CART_STORAGE_KEY, b"{\"not\":\"a cart\"}")
        .unwrap();

    let cart = CartStore::open(storage);
    assert!(cart.is_empty());
    assert_eq!(cart.cart_count(), 0);
}
