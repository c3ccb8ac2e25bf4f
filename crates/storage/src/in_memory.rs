//! In-memory snapshot store (dev/test).

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use trolley_cart::{Cart, CartSnapshot};

use crate::store::{CartStorage, StorageError};

/// Storage that keeps the *encoded* snapshot in memory.
///
/// Holding the encoded form rather than a `Cart` keeps the same ownership rule
/// as the file store: persistence never aliases the engine's live cart. Tests
/// can inject raw bytes and count writes.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    encoded: Mutex<Option<String>>,
    saves: AtomicUsize,
    fail_saves: Mutex<bool>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Inject raw stored bytes (e.g. a corrupt snapshot).
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.encoded.lock().unwrap() = Some(raw.into());
    }

    /// Current stored bytes, if any.
    pub fn raw(&self) -> Option<String> {
        self.encoded.lock().unwrap().clone()
    }

    /// Make every subsequent `save` call fail.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }
}

impl CartStorage for InMemoryStorage {
    fn load(&self) -> Result<Option<Cart>, StorageError> {
        let encoded = self.encoded.lock().unwrap();
        let raw = match encoded.as_deref() {
            Some(raw) => raw,
            None => return Ok(None),
        };

        match CartSnapshot::decode(raw) {
            Ok(snapshot) => Ok(Some(snapshot.into_cart())),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable cart snapshot");
                Ok(None)
            }
        }
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io("injected save failure".to_string()));
        }

        let encoded = CartSnapshot::of(cart)
            .encode()
            .map_err(|e| StorageError::Encode(e.to_string()))?;
        *self.encoded.lock().unwrap() = Some(encoded);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trolley_cart::{CartItem, ProductDetails};
    use trolley_core::ProductId;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.push(CartItem {
            product_id: ProductId::new(1),
            details: ProductDetails {
                name: "Sneaker".to_string(),
                price_cents: 9_990,
                image_url: String::new(),
            },
            quantity: 1,
        })
        .unwrap();
        cart
    }

    #[test]
    fn save_then_load_round_trips() {
        let storage = InMemoryStorage::new();
        let cart = sample_cart();

        storage.save(&cart).unwrap();
        assert_eq!(storage.load().unwrap(), Some(cart));
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn corrupt_raw_bytes_load_as_empty() {
        let storage = InMemoryStorage::new();
        storage.set_raw("][");
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn injected_save_failure_leaves_previous_snapshot() {
        let storage = InMemoryStorage::new();
        let cart = sample_cart();
        storage.save(&cart).unwrap();

        storage.fail_saves(true);
        assert!(storage.save(&Cart::new()).is_err());
        assert_eq!(storage.load().unwrap(), Some(cart));
        assert_eq!(storage.save_count(), 1);
    }
}
