//! In-memory catalog (dev/test).

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use trolley_cart::ProductDetails;
use trolley_core::ProductId;

use crate::lookup::{CatalogError, InventoryLookup, StockLevel};

#[derive(Debug, Default)]
struct Inner {
    stock: HashMap<ProductId, u32>,
    products: HashMap<ProductId, ProductDetails>,
    fail_stock: bool,
    fail_product: bool,
}

/// Catalog held entirely in memory, with failure injection for engine tests.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    inner: Mutex<Inner>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, product_id: ProductId, details: ProductDetails, available: u32) {
        let mut inner = self.inner.lock().unwrap();
        inner.products.insert(product_id, details);
        inner.stock.insert(product_id, available);
    }

    pub fn set_stock(&self, product_id: ProductId, available: u32) {
        self.inner.lock().unwrap().stock.insert(product_id, available);
    }

    /// Make every subsequent `stock` call fail with a network error.
    pub fn fail_stock(&self, fail: bool) {
        self.inner.lock().unwrap().fail_stock = fail;
    }

    /// Make every subsequent `product` call fail with a network error.
    pub fn fail_product(&self, fail: bool) {
        self.inner.lock().unwrap().fail_product = fail;
    }
}

#[async_trait]
impl InventoryLookup for InMemoryCatalog {
    async fn stock(&self, product_id: ProductId) -> Result<StockLevel, CatalogError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_stock {
            return Err(CatalogError::Network("injected stock failure".to_string()));
        }
        inner
            .stock
            .get(&product_id)
            .map(|available| StockLevel { available: *available })
            .ok_or(CatalogError::NotFound(product_id))
    }

    async fn product(&self, product_id: ProductId) -> Result<ProductDetails, CatalogError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_product {
            return Err(CatalogError::Network("injected product failure".to_string()));
        }
        inner
            .products
            .get(&product_id)
            .cloned()
            .ok_or(CatalogError::NotFound(product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str) -> ProductDetails {
        ProductDetails {
            name: name.to_string(),
            price_cents: 12_900,
            image_url: String::new(),
        }
    }

    #[tokio::test]
    async fn returns_inserted_stock_and_details() {
        let catalog = InMemoryCatalog::new();
        let id = ProductId::new(5);
        catalog.insert(id, details("Shoe"), 10);

        assert_eq!(catalog.stock(id).await.unwrap().available, 10);
        assert_eq!(catalog.product(id).await.unwrap().name, "Shoe");
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let catalog = InMemoryCatalog::new();
        let err = catalog.stock(ProductId::new(404)).await.unwrap_err();
        match err {
            CatalogError::NotFound(_) => {}
            _ => panic!("Expected NotFound"),
        }
    }

    #[tokio::test]
    async fn failure_injection_turns_calls_into_network_errors() {
        let catalog = InMemoryCatalog::new();
        let id = ProductId::new(1);
        catalog.insert(id, details("Boot"), 3);
        catalog.fail_stock(true);

        let err = catalog.stock(id).await.unwrap_err();
        match err {
            CatalogError::Network(_) => {}
            _ => panic!("Expected Network error"),
        }

        catalog.fail_stock(false);
        assert_eq!(catalog.stock(id).await.unwrap().available, 3);
    }
}
