//! The persisted cart store.

use amv_storage::KvStore;
use tracing::{debug, warn};

use crate::cart::CartLine;
use crate::catalog::Product;

/// Storage slot holding the persisted cart snapshot.
pub const CART_STORAGE_KEY: &str = "amv_cart";

type Subscriber = Box<dyn Fn(&[CartLine])>;

/// The cart: an ordered sequence of line items synchronized to a
/// key-value slot.
///
/// The store is the only mutator of its lines. Every mutation rewrites
/// the full snapshot under [`CART_STORAGE_KEY`] and then notifies
/// subscribers, synchronously, on the calling thread. Persistence is
/// fire-and-forget: a failed write leaves the previous snapshot stale
/// until the next successful mutation.
///
/// Add operations merge on the full `(product_id, size, color)` key;
/// update and remove match on `product_id` alone and therefore affect
/// every size/color line of that product. Both behaviors are pinned by
/// tests.
pub struct CartStore<S: KvStore> {
    storage: S,
    lines: Vec<CartLine>,
    subscribers: Vec<Subscriber>,
}

impl<S: KvStore> CartStore<S> {
    /// Open a cart over the given storage, restoring any prior snapshot.
    ///
    /// An absent snapshot yields an empty cart; an unreadable one is
    /// logged and discarded.
    pub fn open(storage: S) -> Self {
        let lines = match storage.get::<Vec<CartLine>>(CART_STORAGE_KEY) {
            Ok(Some(lines)) => lines,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "discarding unreadable cart snapshot");
                Vec::new()
            }
        };
        debug!(lines = lines.len(), "cart restored");
        Self {
            storage,
            lines,
            subscribers: Vec::new(),
        }
    }

    /// Add a product selection to the cart.
    ///
    /// If a line with the same `(product_id, size, color)` key exists its
    /// quantity is incremented; otherwise a new line is appended.
    /// `quantity` defaults to 1 when unset or zero. Whether `size` and
    /// `color` are valid options of the product is the caller's concern.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        size: impl Into<String>,
        color: impl Into<String>,
        quantity: Option<u32>,
    ) {
        let size = size.into();
        let color = color.into();
        let quantity = quantity.unwrap_or(1).max(1);

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(product.id, &size, &color))
        {
            existing.quantity += quantity;
        } else {
            self.lines
                .push(CartLine::from_product(product, size, color, quantity));
        }
        self.commit();
    }

    /// Set the quantity of every line of a product.
    ///
    /// Matches by product id only: all size/color lines of the product
    /// get the new quantity. Values below 1 clamp to 1; a line is never
    /// removed this way.
    pub fn update_quantity(&mut self, product_id: u32, quantity: u32) {
        let quantity = quantity.max(1);
        let mut touched = false;
        for line in self.lines.iter_mut().filter(|l| l.product_id == product_id) {
            line.quantity = quantity;
            touched = true;
        }
        if touched {
            self.commit();
        }
    }

    /// Remove every line of a product (id-only match).
    pub fn remove_from_cart(&mut self, product_id: u32) {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        if self.lines.len() < before {
            self.commit();
        }
    }

    /// Empty the cart entirely.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
        self.commit();
    }

    /// Total item count: the sum of all line quantities.
    pub fn cart_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// The current line sequence, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Register an observer invoked with the line slice after every
    /// mutation.
    pub fn subscribe(&mut self, subscriber: impl Fn(&[CartLine]) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn commit(&mut self) {
        if let Err(err) = self.storage.set(CART_STORAGE_KEY, &self.lines) {
            warn!(error = %err, "failed to persist cart, snapshot is stale");
        }
        for subscriber in &self.subscribers {
            subscriber(&self.lines);
        }
        debug!(lines = self.lines.len(), count = self.cart_count(), "cart committed");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use amv_storage::MemoryStore;

    use super::*;
    use crate::money::Money;

    fn product(id: u32, price: i64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            category: "Running".to_string(),
            price: Money::new(price),
            discount: 0,
            final_price: Money::new(price),
            stock: 10,
            sizes: vec!["41".to_string(), "42".to_string()],
            colors: vec!["Black".to_string(), "White".to_string()],
            rating: 4.5,
            reviews: 10,
            description: String::new(),
            features: vec![],
            image: String::new(),
        }
    }

    fn empty_store() -> CartStore<MemoryStore> {
        CartStore::open(MemoryStore::new())
    }

    #[test]
    fn distinct_keys_produce_distinct_lines() {
        let mut cart = empty_store();
        let p = product(1, 100_000);
        cart.add_to_cart(&p, "41", "Black", None);
        cart.add_to_cart(&p, "42", "Black", None);
        cart.add_to_cart(&p, "41", "White", None);

        assert_eq!(cart.lines().len(), 3);
        assert_eq!(cart.cart_count(), 3);
    }

    #[test]
    fn same_key_merges_quantities() {
        let mut cart = empty_store();
        let p = product(1, 100_000);
        cart.add_to_cart(&p, "41", "Black", Some(1));
        cart.add_to_cart(&p, "41", "Black", Some(2));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn quantity_defaults_to_one() {
        let mut cart = empty_store();
        cart.add_to_cart(&product(1, 100_000), "41", "Black", None);
        assert_eq!(cart.lines()[0].quantity, 1);

        // A zero quantity behaves like an unset one
        cart.add_to_cart(&product(2, 100_000), "41", "Black", Some(0));
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn update_clamps_to_one() {
        let mut cart = empty_store();
        cart.add_to_cart(&product(1, 100_000), "41", "Black", Some(3));

        cart.update_quantity(1, 0);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn updates_every_line_of_a_product() {
        // Update matches by product id only, not the full key: both size
        // variants change together.
        let mut cart = empty_store();
        let p = product(1, 100_000);
        cart.add_to_cart(&p, "41", "Black", Some(1));
        cart.add_to_cart(&p, "42", "Black", Some(2));
        cart.add_to_cart(&product(2, 50_000), "41", "Black", Some(1));

        cart.update_quantity(1, 5);

        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.lines()[1].quantity, 5);
        assert_eq!(cart.lines()[2].quantity, 1);
    }

    #[test]
    fn remove_drops_every_line_of_a_product() {
        let mut cart = empty_store();
        let p = product(1, 100_000);
        cart.add_to_cart(&p, "41", "Black", None);
        cart.add_to_cart(&p, "42", "White", None);
        cart.add_to_cart(&product(2, 50_000), "41", "Black", None);

        cart.remove_from_cart(1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].product_id, 2);
    }

    #[test]
    fn update_unknown_product_is_a_no_op() {
        let mut cart = empty_store();
        cart.add_to_cart(&product(1, 100_000), "41", "Black", None);
        cart.update_quantity(99, 5);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn clear_empties_cart_and_snapshot() {
        let mut cart = empty_store();
        cart.add_to_cart(&product(1, 100_000), "41", "Black", Some(2));
        cart.clear_cart();

        assert_eq!(cart.cart_count(), 0);
        assert!(cart.is_empty());

        let raw = cart.storage().get_raw(CART_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw, b"[]");
    }

    #[test]
    fn snapshot_round_trip_preserves_lines() {
        let mut cart = empty_store();
        let p1 = product(1, 100_000);
        cart.add_to_cart(&p1, "41", "Black", Some(2));
        cart.add_to_cart(&product(2, 250_000), "42", "White", Some(1));

        // Rebuild a store from the persisted bytes alone
        let raw = cart.storage().get_raw(CART_STORAGE_KEY).unwrap().unwrap();
        let mut storage = MemoryStore::new();
        storage.set_raw(CART_STORAGE_KEY, &raw).unwrap();
        let restored = CartStore::open(storage);

        assert_eq!(restored.lines(), cart.lines());
        assert_eq!(restored.cart_count(), 3);
    }

    #[test]
    fn malformed_snapshot_yields_empty_cart() {
        let mut storage = MemoryStore::new();
        storage.set_raw(CART_STORAGE_KEY, b"{ not a cart").unwrap();

        let cart = CartStore::open(storage);
        assert!(cart.is_empty());
    }

    #[test]
    fn absent_snapshot_yields_empty_cart() {
        let cart = empty_store();
        assert!(cart.is_empty());
        assert_eq!(cart.cart_count(), 0);
    }

    #[test]
    fn every_mutation_persists() {
        let mut cart = empty_store();
        let p = product(1, 100_000);

        cart.add_to_cart(&p, "41", "Black", None);
        let after_add: Vec<CartLine> =
            cart.storage().get(CART_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(after_add.len(), 1);

        cart.update_quantity(1, 4);
        let after_update: Vec<CartLine> =
            cart.storage().get(CART_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(after_update[0].quantity, 4);

        cart.remove_from_cart(1);
        let after_remove: Vec<CartLine> =
            cart.storage().get(CART_STORAGE_KEY).unwrap().unwrap();
        assert!(after_remove.is_empty());
    }

    #[test]
    fn subscribers_run_after_each_mutation() {
        let mut cart = empty_store();
        let seen = Rc::new(Cell::new(0u32));

        let counter = Rc::clone(&seen);
        cart.subscribe(move |lines| {
            counter.set(counter.get() + 1);
            let _ = lines;
        });

        cart.add_to_cart(&product(1, 100_000), "41", "Black", None);
        cart.update_quantity(1, 2);
        cart.clear_cart();

        assert_eq!(seen.get(), 3);
    }
}
