use serde::{Deserialize, Serialize};

use trolley_core::{DomainError, ProductId};

/// Display data for a product, passed through unmodified from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price_cents: u64,
    pub image_url: String,
}

/// A single line item in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub details: ProductDetails,
    pub quantity: u32,
}

/// Ordered sequence of line items, at most one per product id.
///
/// Order is insertion order; not semantically significant but preserved across
/// persistence round-trips. Backed by a `Vec` with linear scans -- carts hold a
/// handful of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Quantity currently in the cart for `product_id`, 0 if absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.get(product_id).map_or(0, |item| item.quantity)
    }

    /// Append a new line item.
    ///
    /// Rejects a duplicate product id to uphold the one-item-per-id invariant;
    /// use [`Cart::set_quantity`] to change an existing line.
    pub fn push(&mut self, item: CartItem) -> Result<(), DomainError> {
        if self.get(item.product_id).is_some() {
            return Err(DomainError::invariant(format!(
                "duplicate line item for product {}",
                item.product_id
            )));
        }
        self.items.push(item);
        Ok(())
    }

    /// Set the quantity of an existing line item.
    ///
    /// Returns `true` if a matching item was found and updated. A non-matching
    /// id leaves the cart untouched.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        match self.items.iter_mut().find(|item| item.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove the line item for `product_id`, if present.
    ///
    /// Removing an absent id is a no-op, not an error. Returns whether an item
    /// was removed. Remaining items keep their original order.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        match self.items.iter().position(|item| item.product_id == product_id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

impl From<Vec<CartItem>> for Cart {
    /// Rebuild a cart from raw items (persistence path). Later duplicates of a
    /// product id are dropped so a tampered snapshot cannot break the
    /// one-item-per-id invariant.
    fn from(items: Vec<CartItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            let _ = cart.push(item);
        }
        cart
    }
}
