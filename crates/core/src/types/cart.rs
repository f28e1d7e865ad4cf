//! The cart value type.
//!
//! One shared cart backs every catalog view. Entries are kept in insertion
//! order and are unique by product id; quantities are always >= 1. Both
//! invariants hold across every operation: adding an existing product bumps
//! its quantity in place, and setting a quantity to zero or below removes
//! the entry instead of storing it.
//!
//! This is the pure value type - persistence lives in the storefront's
//! `CartStore`, which serializes the whole cart after each mutation.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;
use crate::types::product::Product;

/// One product-plus-quantity record within the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,
    /// Always >= 1.
    pub quantity: u32,
}

impl CartEntry {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price().times(self.quantity)
    }
}

/// An insertion-ordered sequence of cart entries, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add one unit of `product`.
    ///
    /// If an entry with the same product id already exists its quantity is
    /// incremented in place, preserving its position; otherwise a new entry
    /// with quantity 1 is appended.
    pub fn add(&mut self, product: Product) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.product.id() == product.id())
        {
            entry.quantity = entry.quantity.saturating_add(1);
            return;
        }
        self.entries.push(CartEntry {
            product,
            quantity: 1,
        });
    }

    /// Remove the entry with the given product id, if present.
    pub fn remove(&mut self, id: &ProductId) {
        self.entries.retain(|entry| entry.product.id() != id);
    }

    /// Set the quantity of the entry with the given product id.
    ///
    /// A quantity of zero or below removes the entry, exactly like
    /// [`Cart::remove`]. Updating an existing entry leaves its position
    /// unchanged. Unknown ids are a no-op.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.product.id() == id)
        {
            entry.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum of all entries' quantities (not the entry count).
    ///
    /// Recomputed on every read.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.quantity))
            .sum()
    }

    /// Sum of all entries' line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// True when the cart holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
