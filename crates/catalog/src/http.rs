//! HTTP client for the catalog service.

use async_trait::async_trait;
use serde::Deserialize;

use trolley_cart::ProductDetails;
use trolley_core::ProductId;

use crate::lookup::{CatalogError, InventoryLookup, StockLevel};

/// Wire shape of `GET {base}/stock/{id}`.
#[derive(Debug, Deserialize)]
struct StockResponse {
    amount: u32,
}

/// Catalog backed by the remote inventory service.
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: Some(token.into()),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        product_id: ProductId,
    ) -> Result<T, CatalogError> {
        let url = format!("{}/{}/{}", self.base_url, path, product_id);
        let mut req = self.client.get(&url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(product_id));
        }
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(CatalogError::Api(status, body));
        }

        resp.json().await.map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[async_trait]
impl InventoryLookup for HttpCatalog {
    async fn stock(&self, product_id: ProductId) -> Result<StockLevel, CatalogError> {
        let resp: StockResponse = self.get_json("stock", product_id).await?;
        Ok(StockLevel { available: resp.amount })
    }

    async fn product(&self, product_id: ProductId) -> Result<ProductDetails, CatalogError> {
        self.get_json("products", product_id).await
    }
}
