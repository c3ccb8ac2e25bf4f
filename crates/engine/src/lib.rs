//! `trolley-engine` — the cart mutation engine.
//!
//! One explicit store object per session, constructed from persistence and
//! injected into the presentation layer. Three mutating operations
//! (`add_product`, `remove_product`, `update_product_amount`), each validated
//! against the remote stock lookup and persisted wholesale on success.

pub mod engine;
pub mod error;

pub use engine::{AmountDirection, CartEngine, UpdateProductAmount};
pub use error::CartError;
