use serde::{Deserialize, Serialize};

use trolley_cart::{Cart, CartItem};
use trolley_catalog::InventoryLookup;
use trolley_core::ProductId;
use trolley_notify::{messages, Notifier};
use trolley_storage::CartStorage;

use crate::error::CartError;

/// Direction of a quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountDirection {
    Increment,
    Decrement,
}

/// Request to change a line item's quantity by one step.
///
/// `amount` is the item's prospective new total quantity as seen by the
/// caller, validated against stock before the stored quantity moves by 1. It
/// is signed so the zero/negative guard is expressible at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
    pub direction: AmountDirection,
}

/// The cart engine: exclusive owner of the in-memory cart.
///
/// Constructed once per session from the persisted snapshot. Every operation
/// is atomic from the caller's perspective: mutations are staged on a copy of
/// the cart and committed only after the snapshot write succeeds, so a failed
/// operation leaves the observable cart exactly as it was.
///
/// Single logical caller assumed (operations serialized by user interaction);
/// there is no cross-operation locking or version check.
pub struct CartEngine<L, S, N> {
    lookup: L,
    storage: S,
    notifier: N,
    cart: Cart,
}

impl<L, S, N> CartEngine<L, S, N>
where
    L: InventoryLookup,
    S: CartStorage,
    N: Notifier,
{
    /// Build the engine, loading the initial cart from storage.
    ///
    /// Absent or unreadable snapshots start an empty cart; a storage read
    /// error is downgraded the same way since there is nothing better to do
    /// at session start.
    pub fn new(lookup: L, storage: S, notifier: N) -> Self {
        let cart = match storage.load() {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load cart snapshot, starting empty");
                Cart::new()
            }
        };

        Self {
            lookup,
            storage,
            notifier,
            cart,
        }
    }

    /// Current cart state (read access for the presentation layer).
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of `product_id` to the cart.
    ///
    /// Fetches the stock level, rejects the mutation if `current + 1` exceeds
    /// it, and otherwise bumps the existing line or appends a new one with the
    /// fetched display data.
    pub async fn add_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let result = self.try_add_product(product_id).await;
        if let Err(err) = &result {
            self.notifier.notify_error(match err {
                CartError::StockExceeded { .. } => messages::OUT_OF_STOCK,
                _ => messages::ADD_FAILED,
            });
        }
        result
    }

    async fn try_add_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let stock = self.lookup.stock(product_id).await?;
        let current = self.cart.quantity_of(product_id);
        let desired = current + 1;

        if desired > stock.available {
            return Err(CartError::StockExceeded {
                product_id,
                requested: desired,
                available: stock.available,
            });
        }

        let mut next = self.cart.clone();
        if !next.set_quantity(product_id, desired) {
            let details = self.lookup.product(product_id).await?;
            next.push(CartItem {
                product_id,
                details,
                quantity: 1,
            })?;
        }

        self.commit(next)?;
        tracing::debug!(%product_id, quantity = desired, "added product to cart");
        Ok(())
    }

    /// Remove the line item for `product_id`.
    ///
    /// Removing an absent id is a no-op: no mutation, no notification, no
    /// persistence write. This operation performs no remote I/O; the only
    /// designed failure mode is the snapshot write.
    pub fn remove_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let result = self.try_remove_product(product_id);
        if result.is_err() {
            self.notifier.notify_error(messages::REMOVE_FAILED);
        }
        result
    }

    fn try_remove_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let mut next = self.cart.clone();
        if !next.remove(product_id) {
            return Ok(());
        }

        self.commit(next)?;
        tracing::debug!(%product_id, "removed product from cart");
        Ok(())
    }

    /// Move a line item's quantity one step in the requested direction.
    ///
    /// `amount <= 0` returns without mutating, persisting, or notifying: the
    /// guard that keeps this path from committing zero or negative totals.
    pub async fn update_product_amount(
        &mut self,
        request: UpdateProductAmount,
    ) -> Result<(), CartError> {
        if request.amount <= 0 {
            return Ok(());
        }

        let result = self.try_update_product_amount(request).await;
        if let Err(err) = &result {
            self.notifier.notify_error(match err {
                CartError::StockExceeded { .. } => messages::OUT_OF_STOCK,
                _ => messages::UPDATE_AMOUNT_FAILED,
            });
        }
        result
    }

    async fn try_update_product_amount(
        &mut self,
        request: UpdateProductAmount,
    ) -> Result<(), CartError> {
        let stock = self.lookup.stock(request.product_id).await?;
        let mut next = self.cart.clone();
        let current = next.quantity_of(request.product_id);

        match request.direction {
            AmountDirection::Increment => {
                // Strict `<`: the prospective total is checked before the
                // stored quantity moves, so the last unit in stock is
                // unreachable through this path. Long-standing boundary quirk
                // of the stock check, kept as documented behavior (DESIGN.md).
                if request.amount < i64::from(stock.available) {
                    next.set_quantity(request.product_id, current + 1);
                } else {
                    return Err(CartError::StockExceeded {
                        product_id: request.product_id,
                        requested: u32::try_from(request.amount).unwrap_or(u32::MAX),
                        available: stock.available,
                    });
                }
            }
            AmountDirection::Decrement => {
                // No floor check here beyond the `amount <= 0` guard: the
                // caller contract is that `amount` matches the stored
                // quantity. Quantities are unsigned, so a mismatched caller
                // bottoms out at 0 instead of going negative.
                if current > 0 {
                    next.set_quantity(request.product_id, current.saturating_sub(1));
                }
            }
        }

        // A request for a product that is not in the cart changes nothing but
        // still persists the (identical) snapshot on this success path.
        self.commit(next)?;
        tracing::debug!(
            product_id = %request.product_id,
            direction = ?request.direction,
            "updated product amount"
        );
        Ok(())
    }

    /// Persist `next` and commit it as the in-memory cart.
    ///
    /// On a failed write the staged cart is dropped and `self.cart` stays
    /// untouched, keeping the operation atomic.
    fn commit(&mut self, next: Cart) -> Result<(), CartError> {
        self.storage.save(&next)?;
        self.cart = next;
        Ok(())
    }
}
