//! The persisted cart store.

use hvrdcr_market_core::{Cart, CartEntry, Price, Product, ProductId};

use crate::storage::{CART_KEY, SnapshotStore};

/// Owner of the session's single cart.
///
/// Every mutating operation delegates to the [`Cart`] value type (which
/// maintains the id-uniqueness and quantity invariants) and then persists
/// the full cart under the fixed cart key. Reads are derived from the
/// in-memory state.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    storage: SnapshotStore,
}

impl CartStore {
    /// Open the cart store, restoring the persisted cart when a valid
    /// snapshot exists and starting empty otherwise.
    #[must_use]
    pub fn open(storage: SnapshotStore) -> Self {
        let cart = storage.load(CART_KEY).unwrap_or_default();
        Self { cart, storage }
    }

    /// Add one unit of `product`; aggregates with an existing entry of the
    /// same id.
    pub fn add_item(&mut self, product: Product) {
        self.cart.add(product);
        self.persist();
    }

    /// Remove the entry with the given id, if present.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.cart.remove(id);
        self.persist();
    }

    /// Set an entry's quantity; zero or below removes the entry.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) {
        self.cart.set_quantity(id, quantity);
        self.persist();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Sum of all entries' quantities, recomputed per read.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.cart.total_item_count()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.cart.subtotal()
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        self.cart.entries()
    }

    /// True when the cart holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    fn persist(&self) {
        self.storage.save(CART_KEY, &self.cart);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use hvrdcr_market_core::{Cpu, Manufacturer};

    fn cpu(name: &str, price: &str) -> Product {
        Product::Cpu(Cpu {
            id: ProductId::from(format!("{name}-AM4-0-false").as_str()),
            name: name.to_owned(),
            socket: "AM4".to_owned(),
            price: Price::parse_cell(price).unwrap(),
            manufacturer: Manufacturer::Amd,
            is_server: false,
        })
    }

    #[test]
    fn test_mutations_persist_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let a = cpu("Ryzen 5 5600X", "15990");
        let b = cpu("Ryzen 7 5800X", "25990");

        {
            let mut store = CartStore::open(SnapshotStore::new(dir.path()));
            store.add_item(a.clone());
            store.add_item(b.clone());
            store.add_item(a.clone());
            store.set_quantity(b.id(), 5);
        }

        // A fresh store restores the same ids, quantities, and order.
        let store = CartStore::open(SnapshotStore::new(dir.path()));
        assert_eq!(store.entries().len(), 2);
        assert_eq!(store.entries()[0].product.id(), a.id());
        assert_eq!(store.entries()[0].quantity, 2);
        assert_eq!(store.entries()[1].product.id(), b.id());
        assert_eq!(store.entries()[1].quantity, 5);
        assert_eq!(store.total_item_count(), 7);
    }

    #[test]
    fn test_open_with_missing_snapshot_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::open(SnapshotStore::new(dir.path()));
        assert!(store.is_empty());
        assert_eq!(store.total_item_count(), 0);
    }

    #[test]
    fn test_open_with_corrupt_snapshot_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hvrdcr-market-cart.json"), b"][").unwrap();

        let store = CartStore::open(SnapshotStore::new(dir.path()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_persists_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = CartStore::open(SnapshotStore::new(dir.path()));
            store.add_item(cpu("Ryzen 5 5600X", "15990"));
            store.clear();
        }
        let store = CartStore::open(SnapshotStore::new(dir.path()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let a = cpu("Ryzen 5 5600X", "15990");
        {
            let mut store = CartStore::open(SnapshotStore::new(dir.path()));
            store.add_item(a.clone());
            store.set_quantity(a.id(), 0);
        }
        let store = CartStore::open(SnapshotStore::new(dir.path()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_subtotal_derived_from_entries() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CartStore::open(SnapshotStore::new(dir.path()));
        store.add_item(cpu("Ryzen 5 5600X", "15990"));
        store.add_item(cpu("Ryzen 5 5600X", "15990"));
        assert_eq!(store.subtotal(), Price::parse_cell("31980").unwrap());
    }
}
