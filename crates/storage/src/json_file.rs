//! JSON-file snapshot store under the OS data directory.

use std::path::PathBuf;

use anyhow::Context;

use trolley_cart::{Cart, CartSnapshot};

use crate::store::{CartStorage, StorageError};

/// Cart persistence backed by a single JSON file:
/// `{app_data_dir}/trolley/cart.json` by default.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a store at the default OS data-dir location.
    pub fn new() -> Result<Self, StorageError> {
        let path = default_snapshot_path().map_err(|e| StorageError::Path(format!("{e:#}")))?;
        Ok(Self { path })
    }

    /// Create a store at an explicit path (tests, alternate profiles).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Cart>, StorageError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StorageError::Io(err.to_string())),
        };

        match CartSnapshot::decode(&raw) {
            Ok(snapshot) => Ok(Some(snapshot.into_cart())),
            Err(err) => {
                // Corrupt snapshot loads as an empty cart; the next successful
                // mutation overwrites it.
                tracing::warn!(path = %self.path.display(), error = %err, "discarding unreadable cart snapshot");
                Ok(None)
            }
        }
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let encoded = CartSnapshot::of(cart)
            .encode()
            .map_err(|e| StorageError::Encode(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
        }
        std::fs::write(&self.path, encoded).map_err(|e| StorageError::Io(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), items = cart.len(), "persisted cart snapshot");
        Ok(())
    }
}

/// Resolve the path to the snapshot file: `{app_data_dir}/trolley/cart.json`.
fn default_snapshot_path() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

    let mut path = base;
    path.push("trolley");
    path.push("cart.json");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trolley_cart::{CartItem, ProductDetails};
    use trolley_core::ProductId;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.push(CartItem {
            product_id: ProductId::new(5),
            details: ProductDetails {
                name: "Shoe".to_string(),
                price_cents: 17_990,
                image_url: "https://cdn.example.com/shoe.jpg".to_string(),
            },
            quantity: 2,
        })
        .unwrap();
        cart
    }

    #[test]
    fn load_before_first_save_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_path(dir.path().join("cart.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_path(dir.path().join("cart.json"));
        let cart = sample_cart();

        storage.save(&cart).unwrap();
        assert_eq!(storage.load().unwrap(), Some(cart));
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_path(dir.path().join("nested/deeper/cart.json"));

        storage.save(&sample_cart()).unwrap();
        assert!(storage.load().unwrap().is_some());
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "{definitely not a snapshot").unwrap();

        let storage = JsonFileStorage::with_path(path);
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn save_overwrites_the_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_path(dir.path().join("cart.json"));

        storage.save(&sample_cart()).unwrap();
        storage.save(&Cart::new()).unwrap();

        assert_eq!(storage.load().unwrap(), Some(Cart::new()));
    }
}
