//! Explicit persisted schema for the cart.
//!
//! The storage layer only ever holds an encoded snapshot, never a live
//! reference to the in-memory cart. Encoding is plain JSON with a `saved_at`
//! timestamp, decoded back into an equal cart (round-trip law).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{Cart, CartItem};

/// Serialized form of the whole cart, overwritten on every successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub saved_at: DateTime<Utc>,
    pub items: Vec<CartItem>,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode cart snapshot: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode cart snapshot: {0}")]
    Decode(#[source] serde_json::Error),
}

impl CartSnapshot {
    pub fn of(cart: &Cart) -> Self {
        Self {
            saved_at: Utc::now(),
            items: cart.items().to_vec(),
        }
    }

    /// Rebuild the in-memory cart this snapshot was taken from.
    pub fn into_cart(self) -> Cart {
        Cart::from(self.items)
    }

    pub fn encode(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(SnapshotError::Encode)
    }

    pub fn decode(raw: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(raw).map_err(SnapshotError::Decode)
    }
}
