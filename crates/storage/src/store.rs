use thiserror::Error;

use trolley_cart::Cart;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage path unavailable: {0}")]
    Path(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("failed to encode cart snapshot: {0}")]
    Encode(String),
}

/// Durable key-value persistence for the cart snapshot.
///
/// Synchronous by design: the engine treats a save as part of the mutation and
/// rolls the in-memory cart back if it fails. `load` returns `Ok(None)` both
/// when nothing was ever stored and when the stored data is unreadable --
/// a corrupt snapshot is treated as an empty cart, not an error.
pub trait CartStorage: Send + Sync {
    fn load(&self) -> Result<Option<Cart>, StorageError>;
    fn save(&self, cart: &Cart) -> Result<(), StorageError>;
}

impl<T: CartStorage + ?Sized> CartStorage for std::sync::Arc<T> {
    fn load(&self) -> Result<Option<Cart>, StorageError> {
        (**self).load()
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        (**self).save(cart)
    }
}
