//! Engine error model.
//!
//! Operations return a structured error kind to callers and tests; the generic
//! human-readable message is only rendered at the notification boundary.

use thiserror::Error;

use trolley_catalog::CatalogError;
use trolley_core::{DomainError, ProductId};
use trolley_storage::StorageError;

#[derive(Debug, Error)]
pub enum CartError {
    /// Business-rule rejection: the prospective quantity exceeds stock.
    #[error("requested quantity exceeds stock for product {product_id}: requested {requested}, available {available}")]
    StockExceeded {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// Transient/infra failure in the remote inventory lookup.
    #[error("inventory lookup failed")]
    Lookup(#[from] CatalogError),

    /// The snapshot write failed; the in-memory cart was rolled back.
    #[error("cart persistence failed")]
    Storage(#[from] StorageError),

    /// Defensive catch-all for local invariant failures. Should not occur
    /// under correct use.
    #[error("cart state error")]
    Domain(#[from] DomainError),
}
