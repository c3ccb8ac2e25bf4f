//! `trolley-cart` — the cart data model.
//!
//! Pure domain state: an ordered sequence of line items, keyed by product id,
//! plus the explicit snapshot schema used for persistence round-trips.

pub mod cart;
pub mod snapshot;

pub use cart::{Cart, CartItem, ProductDetails};
pub use snapshot::{CartSnapshot, SnapshotError};
