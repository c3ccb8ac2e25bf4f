use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use trolley_cart::ProductDetails;
use trolley_core::ProductId;

/// Stock availability for a single product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    /// Maximum quantity currently available.
    pub available: u32,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product {0} not found in catalog")]
    NotFound(ProductId),
    #[error("network error: {0}")]
    Network(String),
    #[error("catalog API error ({0}): {1}")]
    Api(u16, String),
    #[error("failed to decode catalog response: {0}")]
    Decode(String),
}

/// Remote stock and display-data lookup consumed by the cart engine.
///
/// Both calls may fail (network, not-found); the engine treats any failure as
/// terminal for the operation that issued it.
#[async_trait]
pub trait InventoryLookup: Send + Sync {
    /// Current stock level for `product_id`.
    async fn stock(&self, product_id: ProductId) -> Result<StockLevel, CatalogError>;

    /// Display data (name, price, image) for `product_id`, passed through to
    /// the cart unmodified.
    async fn product(&self, product_id: ProductId) -> Result<ProductDetails, CatalogError>;
}

#[async_trait]
impl<T: InventoryLookup + ?Sized> InventoryLookup for std::sync::Arc<T> {
    async fn stock(&self, product_id: ProductId) -> Result<StockLevel, CatalogError> {
        (**self).stock(product_id).await
    }

    async fn product(&self, product_id: ProductId) -> Result<ProductDetails, CatalogError> {
        (**self).product(product_id).await
    }
}
